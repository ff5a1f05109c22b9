use crate::config::Config;
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse configuration from a YAML or JSON file
///
/// The format is chosen by file extension: `.json` parses as JSON,
/// everything else as YAML.
pub fn load_config(config_path: &Path) -> Result<Config> {
    info!("Loading configuration from: {:?}", config_path);

    let file = File::open(config_path)?;

    let config: Config = if config_path
        .extension()
        .map_or(false, |ext| ext == "json")
    {
        serde_json::from_reader(file)?
    } else {
        serde_yaml::from_reader(file)?
    };

    info!(
        "Loaded {} repository entries",
        config.repositories.len()
    );

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_yaml_config() {
        let yaml = r#"
general:
  helm_binary: "helm"
defaults:
  home: "/root/.helm"
repositories:
  - name: "stable"
  - name: "incubator"
"#;

        let mut temp_file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.repositories.len(), 2);
        assert_eq!(config.helm_binary(), "helm");
    }

    #[test]
    fn test_load_json_config() {
        let json = r#"
{
  "repositories": [
    {"name": "stable", "options": {"kube_context": "staging"}}
  ]
}
"#;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(temp_file, "{}", json).unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.repositories.len(), 1);
        assert_eq!(config.repositories[0].name, "stable");
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let yaml = r#"
repositories:
  - name: ""
"#;

        let mut temp_file = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_config(Path::new("/nonexistent/repos.yaml")).is_err());
    }
}

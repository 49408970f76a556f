use siteconf::errors::{Result, SiteconfError};

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_config_load_error() {
        let error = SiteconfError::config_load("site.toml 格式不正确");

        assert!(matches!(error, SiteconfError::ConfigLoad(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Configuration Load Error"));
        assert!(error.to_string().contains("site.toml 格式不正确"));
    }

    #[test]
    fn test_file_operation_error() {
        let error = SiteconfError::file_operation("文件读取失败");

        assert!(matches!(error, SiteconfError::FileOperation(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("File Operation Error"));
    }

    #[test]
    fn test_validation_error() {
        let error = SiteconfError::validation("pagination_size must be greater than 0");

        assert!(matches!(error, SiteconfError::Validation(_)));
        assert_eq!(error.code(), "E003");
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("pagination_size"));
    }

    #[test]
    fn test_not_found_error() {
        let error = SiteconfError::not_found("icon asset missing");

        assert!(matches!(error, SiteconfError::NotFound(_)));
        assert_eq!(error.code(), "E004");
        assert!(error.to_string().contains("Resource Not Found"));
    }

    #[test]
    fn test_serialization_error() {
        let error = SiteconfError::serialization("序列化失败");

        assert!(matches!(error, SiteconfError::Serialization(_)));
        assert_eq!(error.code(), "E005");
        assert!(error.to_string().contains("Serialization Error"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "文件未找到");
        let error: SiteconfError = io_error.into();

        assert!(matches!(error, SiteconfError::FileOperation(_)));
        assert!(error.message().contains("文件未找到"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: SiteconfError = json_error.into();

        assert!(matches!(error, SiteconfError::Serialization(_)));
    }

    #[test]
    fn test_toml_de_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error: SiteconfError = toml_error.into();

        assert!(matches!(error, SiteconfError::ConfigLoad(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::Config::builder()
            .add_source(config::File::with_name("definitely-missing.toml"))
            .build()
            .unwrap_err();
        let error: SiteconfError = config_error.into();

        assert!(matches!(error, SiteconfError::ConfigLoad(_)));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_simple() {
        let error = SiteconfError::validation("some detail");
        assert_eq!(error.format_simple(), "Validation Error: some detail");
    }

    #[test]
    fn test_display_uses_simple_format() {
        let error = SiteconfError::not_found("x");
        assert_eq!(error.to_string(), error.format_simple());
    }

    #[test]
    fn test_codes_are_stable_and_unique() {
        let errors = [
            SiteconfError::config_load(""),
            SiteconfError::file_operation(""),
            SiteconfError::validation(""),
            SiteconfError::not_found(""),
            SiteconfError::serialization(""),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_result_alias() {
        fn helper(fail: bool) -> Result<u32> {
            if fail {
                Err(SiteconfError::validation("boom"))
            } else {
                Ok(1)
            }
        }

        assert_eq!(helper(false).unwrap(), 1);
        assert!(helper(true).is_err());
    }
}

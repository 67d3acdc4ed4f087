use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("EP_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        ep_log::panic(
            None,
            format!("Config file '{config_path}' must exist (set EP_CONFIG_PATH or place config.yml in the current directory)"),
        );
    }

    config_path
}

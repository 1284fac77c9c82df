use lazy_static::lazy_static;
use web_sys::window;

pub const DEFAULT_SEARCH_API_URL: &str = "https://yt-scrapper.fakcloud.tech";
pub const DEFAULT_AI_API_URL: &str = "https://chat-gpt.fak-official.workers.dev";
pub const DEFAULT_COMMUNITY_URL: &str = "https://whatsapp.com/channel/0029Vb7FVyy6BIEdCN9BXh1C";

lazy_static! {
    pub static ref SEARCH_API_URL: String = get_search_api_url();
    pub static ref AI_API_URL: String = get_ai_api_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::debug!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

/// Strips trailing slashes so paths can be appended with a leading `/`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn get_search_api_url() -> String {
    normalize_base_url(
        &get_env_var("SEARCH_API_URL").unwrap_or_else(|| DEFAULT_SEARCH_API_URL.to_string()),
    )
}

pub fn get_ai_api_url() -> String {
    normalize_base_url(&get_env_var("AI_API_URL").unwrap_or_else(|| DEFAULT_AI_API_URL.to_string()))
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "ViralStrats".to_string())
}

pub fn get_community_url() -> String {
    get_env_var("COMMUNITY_URL").unwrap_or_else(|| DEFAULT_COMMUNITY_URL.to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

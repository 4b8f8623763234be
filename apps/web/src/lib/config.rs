//! Build-time configuration for the API endpoint and door list with an optional
//! runtime override. The runtime config is read from `window.P2K16_CONFIG`
//! (if present) so the server that hosts the bundle can change endpoints without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Default request timeout (milliseconds) applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub doors: Vec<String>,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("P2K16_API_BASE_URL").unwrap_or("");
        let doors = option_env!("P2K16_DOORS").unwrap_or("frontdoor");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            doors: parse_doors(doors),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    doors: Option<String>,
    request_timeout_ms: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.doors {
        let doors = parse_doors(&value);
        if !doors.is_empty() {
            config.doors = doors;
        }
    }
    if let Some(value) = runtime.request_timeout_ms {
        match value.parse::<u32>() {
            Ok(timeout) if timeout > 0 => config.request_timeout_ms = timeout,
            _ => log::warn!("ignoring invalid request_timeout_ms override: {value}"),
        }
    }
}

/// Splits a comma separated door list, dropping blank entries.
fn parse_doors(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(normalize_runtime_value)
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("P2K16_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        doors: read_runtime_value(&object, "doors"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a runtime value as a string. Arrays are joined with commas and
/// numbers are formatted, so `doors: ["a", "b"]` and `request_timeout_ms: 5000`
/// both work.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = if js_sys::Array::is_array(&value) {
        js_sys::Array::from(&value).join(",").as_string()?
    } else if let Some(number) = value.as_f64() {
        format!("{number}")
    } else {
        value.as_string()?
    };
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

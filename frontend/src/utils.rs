use chrono::Datelike;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

// Formats view counts as 1.2M / 15K. Strings the provider already
// abbreviated are passed through.
pub fn format_views(views: &str) -> String {
    if views.is_empty() {
        return "0".to_string();
    }
    if views.chars().any(|c| matches!(c, 'K' | 'M' | 'k' | 'm')) {
        return views.to_string();
    }

    let digits: String = views.chars().filter(char::is_ascii_digit).collect();
    let number = match digits.parse::<u64>() {
        Ok(number) => number,
        Err(_) => return views.to_string(),
    };

    if number >= 1_000_000 {
        format!("{}M", one_decimal(number as f64 / 1_000_000.0))
    } else if number >= 1_000 {
        format!("{}K", one_decimal(number as f64 / 1_000.0))
    } else {
        number.to_string()
    }
}

fn one_decimal(value: f64) -> String {
    let formatted = format!("{value:.1}");
    formatted
        .strip_suffix(".0")
        .map(str::to_string)
        .unwrap_or(formatted)
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!(
        "https://i.ytimg.com/vi/{}/hqdefault.jpg",
        urlencoding::encode(video_id)
    )
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Writes `text` through `navigator.clipboard.writeText`.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())
        .map_err(|_| "Clipboard API unavailable".to_string())?;
    if clipboard.is_undefined() {
        return Err("Clipboard API unavailable".to_string());
    }

    let write_text: Function = Reflect::get(&clipboard, &"writeText".into())
        .map_err(|_| "Clipboard API unavailable".to_string())?
        .dyn_into()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;

    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("Clipboard write failed: {e:?}"))?
        .dyn_into()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {e:?}"))
}

pub async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_views_show_zero() {
        assert_eq!(format_views(""), "0");
    }

    #[test]
    fn abbreviated_views_pass_through() {
        assert_eq!(format_views("1.2M views"), "1.2M views");
        assert_eq!(format_views("15k"), "15k");
    }

    #[test]
    fn raw_counts_are_abbreviated() {
        assert_eq!(format_views("1,234,567 views"), "1.2M");
        assert_eq!(format_views("2000000"), "2M");
        assert_eq!(format_views("15,320 views"), "15.3K");
        assert_eq!(format_views("1000"), "1K");
        assert_eq!(format_views("999 views"), "999");
    }

    #[test]
    fn views_without_digits_pass_through() {
        assert_eq!(format_views("No views"), "No views");
    }

    #[test]
    fn thumbnail_url_encodes_id() {
        assert_eq!(
            thumbnail_url("abc123"),
            "https://i.ytimg.com/vi/abc123/hqdefault.jpg"
        );
        assert_eq!(
            thumbnail_url("a/b"),
            "https://i.ytimg.com/vi/a%2Fb/hqdefault.jpg"
        );
    }
}

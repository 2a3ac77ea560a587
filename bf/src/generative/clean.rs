//! Post-processing of raw completions

/// Most sentences kept from a completion
pub const MAX_SENTENCES: usize = 3;

/// Markers some models echo back from the prompt layout
const MARKERS: [&str; 2] = ["Answer:", "Question:"];

/// Tidy a raw completion for display
///
/// Drops an echoed prompt, prompt markers, anything past the third sentence,
/// and a trailing half-sentence. May return an empty string.
pub fn clean_response(generated: &str, prompt: &str) -> String {
    let mut response = if prompt.is_empty() {
        generated.trim().to_string()
    } else {
        generated.replace(prompt, "").trim().to_string()
    };

    for marker in MARKERS {
        response = response.replace(marker, "").trim().to_string();
    }

    let sentences: Vec<&str> = response.split('.').collect();
    if sentences.len() > MAX_SENTENCES {
        let kept: Vec<&str> = sentences[..MAX_SENTENCES].iter().map(|s| s.trim()).collect();
        response = format!("{}.", kept.join(". "));
    }

    if !response.is_empty()
        && !response.ends_with(['.', '!', '?'])
        && let Some(last_period) = response.rfind('.')
        && last_period > 0
    {
        response.truncate(last_period + 1);
    }

    response.trim().to_string()
}

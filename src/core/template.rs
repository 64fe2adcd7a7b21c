use crate::data::ResponseReason;

const REASON_TOKEN: &str = "{reason}";
const AUCTION_ID_TOKEN: &str = "{auction_id}";

/// Build the result-callback URL for one outcome.
///
/// Substitutes the numeric reason code for `{reason}` and the auction ID
/// for `{auction_id}`. A template carrying neither token gets both appended
/// as query parameters instead, so bare tracking URLs keep working.
///
/// # Examples
///
/// ```
/// use adfetch::core::substitute_result_cb;
/// use adfetch::ResponseReason;
///
/// let url = substitute_result_cb(
///     "https://t.example.com/cb?r={reason}&a={auction_id}",
///     ResponseReason::NoFill,
///     "abc123",
/// );
/// assert_eq!(url, "https://t.example.com/cb?r=2&a=abc123");
/// ```
pub fn substitute_result_cb(template: &str, reason: ResponseReason, auction_id: &str) -> String {
    let code = reason.code().to_string();
    if template.contains(REASON_TOKEN) || template.contains(AUCTION_ID_TOKEN) {
        template
            .replace(REASON_TOKEN, &code)
            .replace(AUCTION_ID_TOKEN, auction_id)
    } else {
        let sep = if template.contains('?') { '&' } else { '?' };
        format!("{template}{sep}reason={code}&auction_id={auction_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_both_tokens() {
        let url = substitute_result_cb(
            "https://t.example.com/cb?reason={reason}&auction_id={auction_id}",
            ResponseReason::Success,
            "a-1",
        );
        assert_eq!(url, "https://t.example.com/cb?reason=0&auction_id=a-1");
    }

    #[test]
    fn appends_when_no_tokens_present() {
        let url = substitute_result_cb(
            "https://t.example.com/cb",
            ResponseReason::NetworkError,
            "xyz",
        );
        assert_eq!(url, "https://t.example.com/cb?reason=3&auction_id=xyz");
    }

    #[test]
    fn appends_with_ampersand_when_query_exists() {
        let url = substitute_result_cb(
            "https://t.example.com/cb?src=sdk",
            ResponseReason::NoFill,
            "xyz",
        );
        assert_eq!(url, "https://t.example.com/cb?src=sdk&reason=2&auction_id=xyz");
    }

    #[test]
    fn single_token_still_substitutes() {
        let url = substitute_result_cb(
            "https://t.example.com/cb?r={reason}",
            ResponseReason::Timeout,
            "ignored",
        );
        assert_eq!(url, "https://t.example.com/cb?r=4");
    }
}

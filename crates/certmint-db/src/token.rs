use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::Rng;

/// Random bytes behind each share token
pub const SHARE_TOKEN_BYTES: usize = 10;

/// Generate an unguessable share token (14 URL-safe characters).
pub fn generate_share_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; SHARE_TOKEN_BYTES] = rng.random();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tokens_are_fourteen_url_safe_chars() {
        let token = generate_share_token();
        assert_eq!(token.len(), 14);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_share_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}

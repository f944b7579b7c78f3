use std::str::FromStr;

use url::Url;

use crate::prelude::*;

/// WhatsApp «click to chat» destination.
#[derive(Clone, Debug)]
pub struct WhatsApp {
    /// Full international number, digits only.
    number: String,
}

impl FromStr for WhatsApp {
    type Err = Error;

    fn from_str(number: &str) -> Result<Self> {
        let number = number.trim();
        let digits = number.strip_prefix('+').unwrap_or(number);
        ensure!(
            !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()),
            "`{number}` is not a valid WhatsApp number",
        );
        Ok(Self { number: digits.to_owned() })
    }
}

impl WhatsApp {
    /// Deep link that opens a chat with the text pre-filled. The text is sent as is.
    pub fn link(&self, text: &str) -> Result<Url> {
        Url::parse_with_params(&format!("https://wa.me/{}", self.number), &[("text", text)])
            .context("failed to build the WhatsApp link")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link() -> Result {
        let link = "+91 98765 43210".replace(' ', "").parse::<WhatsApp>()?.link("Hi *there*\n₹160")?;
        assert_eq!(link.as_str(), "https://wa.me/919876543210?text=Hi+*there*%0A%E2%82%B9160");
        Ok(())
    }

    #[test]
    fn test_invalid_number() {
        assert!("".parse::<WhatsApp>().is_err());
        assert!("+".parse::<WhatsApp>().is_err());
        assert!("98765-43210".parse::<WhatsApp>().is_err());
    }
}

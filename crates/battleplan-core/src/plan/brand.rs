//! Phase 6: brand and design. A constant recommendation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSpec {
    pub voice: String,
    pub colors: BrandColors,
    pub design: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub trust: String,
    pub background: String,
    pub action: String,
}

pub fn generate_brand() -> BrandSpec {
    BrandSpec {
        voice: "Authoritative, direct, and empathetic to the pain. We are the expert solution, \
                not just another option."
            .to_owned(),
        colors: BrandColors {
            trust: "Dark Blue/Green".to_owned(),
            background: "White/Light Gray".to_owned(),
            action: "Bright Orange/Red".to_owned(),
        },
        design: "Zero distractions. Single column layout. No navigation, no footer links, no \
                 social icons. The only two exits are the form submission or the browser's back \
                 button."
            .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_is_constant() {
        assert_eq!(generate_brand(), generate_brand());
        assert_eq!(generate_brand().colors.action, "Bright Orange/Red");
    }
}

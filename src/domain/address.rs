/// A saved shipping address. At most one address per customer carries
/// `is_default`, enforced by the address actor on every write.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: String,
    pub customer_id: String,
    pub title: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub is_default: bool,
}

#[derive(Debug, Clone)]
pub struct AddressPayload {
    pub title: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// How the checkout caller picks a shipping address.
#[derive(Debug, Clone)]
pub enum AddressSelection {
    Existing(String),
    New(AddressPayload),
}

impl AddressPayload {
    /// Field rules: title and city alphabetic with at least 5 characters,
    /// address line at least 10 characters of letters and digits only,
    /// postal code exactly 10 digits.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.chars().count() < 5 {
            return Err("Title must be at least 5 characters long.".to_string());
        }
        if self.title.is_empty() || !self.title.chars().all(|c| c.is_alphabetic()) {
            return Err("Title must only contain letters.".to_string());
        }
        if self.city.chars().count() < 5 {
            return Err("City must be at least 5 characters long.".to_string());
        }
        if self.city.is_empty() || !self.city.chars().all(|c| c.is_alphabetic()) {
            return Err("City must only contain letters.".to_string());
        }
        if self.address.chars().count() < 10 {
            return Err("Address must be at least 10 characters long.".to_string());
        }
        if !self.address.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(
                "Address must be a combination of letters and numbers, no spaces or special characters."
                    .to_string(),
            );
        }
        if self.postal_code.chars().count() != 10 {
            return Err("Postal code must be exactly 10 characters long.".to_string());
        }
        if !self.postal_code.chars().all(|c| c.is_ascii_digit()) {
            return Err("Postal code must contain only digits.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> AddressPayload {
        AddressPayload {
            title: "Domicile".to_string(),
            address: "Valiasr12Avenue".to_string(),
            city: "Tehran".to_string(),
            postal_code: "1234567890".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn rejects_short_or_non_alphabetic_title_and_city() {
        let mut p = payload();
        p.title = "Home".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.title = "Home 123".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.city = "NYC".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_bad_address_line() {
        let mut p = payload();
        p.address = "Short1".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.address = "Valiasr Avenue 12".to_string(); // spaces not allowed
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_bad_postal_code() {
        let mut p = payload();
        p.postal_code = "12345".to_string();
        assert!(p.validate().is_err());

        let mut p = payload();
        p.postal_code = "12345abcde".to_string();
        assert!(p.validate().is_err());
    }
}

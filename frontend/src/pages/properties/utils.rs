use crate::api::{Property, PropertyPayload};

pub const PROPERTY_TYPES: [&str; 8] = [
    "apartment",
    "villa",
    "farmhouse",
    "condos",
    "townhouse",
    "duplex",
    "studio",
    "chalet",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl PriceOrder {
    pub fn toggled(self) -> Self {
        match self {
            PriceOrder::Ascending => PriceOrder::Descending,
            _ => PriceOrder::Ascending,
        }
    }
}

pub fn filter_properties(properties: &[Property], query: &str, property_type: &str) -> Vec<Property> {
    let query = query.trim().to_lowercase();
    properties
        .iter()
        .filter(|p| query.is_empty() || p.title.to_lowercase().contains(&query))
        .filter(|p| property_type.is_empty() || p.property_type == property_type)
        .cloned()
        .collect()
}

pub fn sort_by_price(properties: &mut [Property], order: PriceOrder) {
    match order {
        PriceOrder::Unsorted => {}
        PriceOrder::Ascending => properties.sort_by(|a, b| a.price.total_cmp(&b.price)),
        PriceOrder::Descending => properties.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFormInput {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub location: String,
    pub price: String,
    pub photo: String,
}

pub fn validate_property_form(
    input: &PropertyFormInput,
    creator_email: Option<String>,
) -> Result<PropertyPayload, String> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err("Title is required".to_string());
    }
    let location = input.location.trim();
    if location.is_empty() {
        return Err("Location is required".to_string());
    }
    if !PROPERTY_TYPES.contains(&input.property_type.as_str()) {
        return Err("Select a property type".to_string());
    }
    let price: f64 = input
        .price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if price < 0.0 {
        return Err("Price cannot be negative".to_string());
    }
    let photo = input.photo.trim();
    if photo.is_empty() {
        return Err("Photo URL is required".to_string());
    }
    let email = creator_email.ok_or_else(|| "Missing creator email, sign in again".to_string())?;

    Ok(PropertyPayload {
        title: title.to_string(),
        description: input.description.trim().to_string(),
        property_type: input.property_type.clone(),
        location: location.to_string(),
        price,
        photo: photo.to_string(),
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: &str, title: &str, kind: &str, price: f64) -> Property {
        Property {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            property_type: kind.into(),
            location: "Lagos".into(),
            price,
            photo: String::new(),
            creator: None,
        }
    }

    fn valid_input() -> PropertyFormInput {
        PropertyFormInput {
            title: "Sunset Villa".into(),
            description: "Sea view".into(),
            property_type: "villa".into(),
            location: "Lagos".into(),
            price: "2500".into(),
            photo: "https://example.com/p.png".into(),
        }
    }

    #[test]
    fn filter_matches_title_case_insensitively() {
        let properties = vec![
            property("1", "Sunset Villa", "villa", 1.0),
            property("2", "City Loft", "apartment", 1.0),
        ];
        let filtered = filter_properties(&properties, "sunset", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn filter_by_type_keeps_only_that_type() {
        let properties = vec![
            property("1", "A", "villa", 1.0),
            property("2", "B", "apartment", 1.0),
        ];
        let filtered = filter_properties(&properties, "", "apartment");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn empty_filters_keep_everything() {
        let properties = vec![
            property("1", "A", "villa", 1.0),
            property("2", "B", "apartment", 1.0),
        ];
        assert_eq!(filter_properties(&properties, "", "").len(), 2);
    }

    #[test]
    fn price_order_toggles_to_ascending_first() {
        assert_eq!(PriceOrder::Unsorted.toggled(), PriceOrder::Ascending);
        assert_eq!(PriceOrder::Ascending.toggled(), PriceOrder::Descending);
        assert_eq!(PriceOrder::Descending.toggled(), PriceOrder::Ascending);
    }

    #[test]
    fn sorts_by_price_both_ways() {
        let mut properties = vec![
            property("1", "A", "villa", 300.0),
            property("2", "B", "villa", 100.0),
            property("3", "C", "villa", 200.0),
        ];
        sort_by_price(&mut properties, PriceOrder::Ascending);
        assert_eq!(properties[0].id, "2");
        assert_eq!(properties[2].id, "1");
        sort_by_price(&mut properties, PriceOrder::Descending);
        assert_eq!(properties[0].id, "1");
        assert_eq!(properties[2].id, "2");
    }

    #[test]
    fn valid_form_builds_payload() {
        let payload = validate_property_form(&valid_input(), Some("a@x.com".into()))
            .expect("valid input");
        assert_eq!(payload.title, "Sunset Villa");
        assert_eq!(payload.price, 2500.0);
        assert_eq!(payload.email, "a@x.com");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut input = valid_input();
        input.title = "   ".into();
        let err = validate_property_form(&input, Some("a@x.com".into())).unwrap_err();
        assert_eq!(err, "Title is required");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut input = valid_input();
        input.property_type = "castle".into();
        let err = validate_property_form(&input, Some("a@x.com".into())).unwrap_err();
        assert_eq!(err, "Select a property type");
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut input = valid_input();
        input.price = "cheap".into();
        let err = validate_property_form(&input, Some("a@x.com".into())).unwrap_err();
        assert_eq!(err, "Price must be a number");
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut input = valid_input();
        input.price = "-1".into();
        let err = validate_property_form(&input, Some("a@x.com".into())).unwrap_err();
        assert_eq!(err, "Price cannot be negative");
    }

    #[test]
    fn missing_creator_email_is_rejected() {
        let err = validate_property_form(&valid_input(), None).unwrap_err();
        assert_eq!(err, "Missing creator email, sign in again");
    }
}

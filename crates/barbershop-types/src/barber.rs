use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a barber, assigned by the store on creation.
///
/// Serializes as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarberId(pub i64);

impl fmt::Display for BarberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BarberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<i64>()?))
    }
}

/// A barber shop record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    pub id: BarberId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Request body for creating or replacing a barber.
///
/// Omitted or `null` fields decode as empty strings. Any `id` in the body is
/// ignored; the store assigns ids on create and the path supplies it on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberRequest {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub phone: String,
}

impl BarberRequest {
    /// Attach an id, producing the full record.
    pub fn into_barber(self, id: BarberId) -> Barber {
        Barber {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barber_id_parse() {
        assert_eq!("42".parse::<BarberId>().unwrap(), BarberId(42));
        assert_eq!("-3".parse::<BarberId>().unwrap(), BarberId(-3));
        assert!("abc".parse::<BarberId>().is_err());
        assert!("1.5".parse::<BarberId>().is_err());
        assert!("".parse::<BarberId>().is_err());
    }

    #[test]
    fn test_barber_serializes_flat_id() {
        let barber = Barber {
            id: BarberId(1),
            name: "Joe".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-1234".to_string(),
        };
        let json = serde_json::to_string(&barber).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Joe","address":"1 Main St","phone":"555-1234"}"#
        );
    }

    #[test]
    fn test_request_ignores_id_and_defaults_missing_fields() {
        let req: BarberRequest =
            serde_json::from_str(r#"{"id":99,"name":"Joe","phone":null}"#).unwrap();
        assert_eq!(req.name, "Joe");
        assert_eq!(req.address, "");
        assert_eq!(req.phone, "");
    }

    #[test]
    fn test_request_rejects_wrong_field_type() {
        let result = serde_json::from_str::<BarberRequest>(r#"{"name":12}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_barber() {
        let req = BarberRequest {
            name: "Ann".to_string(),
            address: "2 Elm".to_string(),
            phone: "555".to_string(),
        };
        let barber = req.into_barber(BarberId(7));
        assert_eq!(barber.id, BarberId(7));
        assert_eq!(barber.name, "Ann");
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);

/// Postal address of a user. Only `street`, `suite` and `city` are shown;
/// anything else the directory sends (zipcode, geo, ...) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Suite => &self.suite,
            AddressField::City => &self.city,
        }
    }

    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::Street => &mut self.street,
            AddressField::Suite => &mut self.suite,
            AddressField::City => &mut self.city,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Username => &self.username,
            RecordField::Email => &self.email,
            RecordField::Phone => &self.phone,
            RecordField::Website => &self.website,
        }
    }

    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::Name => &mut self.name,
            RecordField::Username => &mut self.username,
            RecordField::Email => &mut self.email,
            RecordField::Phone => &mut self.phone,
            RecordField::Website => &mut self.website,
        };
        *slot = value.into();
    }
}

/// A record under construction in the creation form. Has no id until it is
/// handed to the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub phone: String,
    pub website: String,
}

impl Draft {
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Username => &self.username,
            RecordField::Email => &self.email,
            RecordField::Phone => &self.phone,
            RecordField::Website => &self.website,
        }
    }

    pub fn set_field(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::Name => &mut self.name,
            RecordField::Username => &mut self.username,
            RecordField::Email => &mut self.email,
            RecordField::Phone => &mut self.phone,
            RecordField::Website => &mut self.website,
        };
        *slot = value.into();
    }

    pub fn address_field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Suite => &self.suite,
            AddressField::City => &self.city,
        }
    }

    pub fn set_address_field(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::Street => &mut self.street,
            AddressField::Suite => &mut self.suite,
            AddressField::City => &mut self.city,
        };
        *slot = value.into();
    }

    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: Address {
                street: self.street,
                suite: self.suite,
                city: self.city,
                extra: Map::new(),
            },
            phone: self.phone,
            website: self.website,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

impl RecordField {
    pub const ALL: [RecordField; 5] = [
        RecordField::Name,
        RecordField::Username,
        RecordField::Email,
        RecordField::Phone,
        RecordField::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordField::Name => "Name",
            RecordField::Username => "Username",
            RecordField::Email => "Email",
            RecordField::Phone => "Phone",
            RecordField::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    Suite,
    City,
}

impl AddressField {
    pub const ALL: [AddressField; 3] = [AddressField::Street, AddressField::Suite, AddressField::City];

    pub fn label(self) -> &'static str {
        match self {
            AddressField::Street => "Street",
            AddressField::Suite => "Suite",
            AddressField::City => "City",
        }
    }
}

/// Any editable text field of a form, top-level or nested in the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Record(RecordField),
    Address(AddressField),
}

impl FormField {
    /// Maps a form input id to its field. `street`, `suite` and `city` belong
    /// to the address; unknown ids yield `None`.
    pub fn from_input_id(id: &str) -> Option<Self> {
        let field = match id {
            "name" => FormField::Record(RecordField::Name),
            "username" => FormField::Record(RecordField::Username),
            "email" => FormField::Record(RecordField::Email),
            "phone" => FormField::Record(RecordField::Phone),
            "website" => FormField::Record(RecordField::Website),
            "street" => FormField::Address(AddressField::Street),
            "suite" => FormField::Address(AddressField::Suite),
            "city" => FormField::Address(AddressField::City),
            _ => return None,
        };
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTORY_SAMPLE: &str = r#"{
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona" }
    }"#;

    #[test]
    fn keeps_unused_directory_fields_when_round_tripping() {
        let record: UserRecord = serde_json::from_str(DIRECTORY_SAMPLE).expect("decode");
        assert_eq!(record.id, UserId(1));
        assert_eq!(record.address.city, "Gwenborough");
        assert_eq!(record.address.extra["zipcode"], "92998-3874");
        assert_eq!(record.extra["company"]["name"], "Romaguera-Crona");

        let encoded = serde_json::to_value(&record).expect("encode");
        let original: Value = serde_json::from_str(DIRECTORY_SAMPLE).expect("raw");
        assert_eq!(encoded, original);
    }

    #[test]
    fn draft_becomes_client_shaped_record() {
        let mut draft = Draft::default();
        draft.set_field(RecordField::Name, "Ana");
        draft.set_field(RecordField::Username, "ana1");
        draft.set_address_field(AddressField::City, "Hanoi");

        let record = draft.into_record(UserId(7));
        assert_eq!(record.id, UserId(7));
        assert_eq!(record.name, "Ana");
        assert_eq!(record.address.city, "Hanoi");
        assert!(record.extra.is_empty());
        assert!(record.address.extra.is_empty());
    }

    #[test]
    fn routes_address_input_ids_into_the_address() {
        assert_eq!(
            FormField::from_input_id("city"),
            Some(FormField::Address(AddressField::City))
        );
        assert_eq!(
            FormField::from_input_id("username"),
            Some(FormField::Record(RecordField::Username))
        );
        assert_eq!(FormField::from_input_id("zipcode"), None);
    }
}

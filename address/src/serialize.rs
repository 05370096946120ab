use {
    crate::Strkey,
    core::fmt,
    serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    },
};

impl Serialize for Strkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct StrkeyVisitor;

impl Visitor<'_> for StrkeyVisitor {
    type Value = Strkey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a StrKey string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Strkey, E> {
        Strkey::from_string(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Strkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(StrkeyVisitor)
    }
}

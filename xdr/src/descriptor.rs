/// Whether a struct field must be supplied when building a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Required,
    /// Synthesized from the type's `Default` (e.g. an empty extension) when
    /// left unset.
    Defaulted,
}

/// One field of a struct, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub type_name: &'static str,
    pub presence: Presence,
}

impl FieldDescriptor {
    pub const fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required)
    }
}

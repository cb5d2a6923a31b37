//! The schema descriptor model the host pipeline hands to the generator.
//!
//! This is the raw, unclassified view of one schema file: messages with
//! ordered fields, oneof groups, nested messages and per-message
//! annotations. The classifier in [`plan`](crate::plan) normalizes it into
//! per-field plans; nothing downstream of the classifier reads these types.
//!
//! Map fields appear here the way descriptors carry them: as a repeated
//! message field whose target message is flagged [`map_entry`]
//! (key at number 1, value at number 2). The classifier validates that
//! shape and collapses it into an associative-container plan.
//!
//! [`map_entry`]: MessageSchema::map_entry

/// Schema revision, driving presence defaults and packed-encoding defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    /// Singular scalars have explicit presence; repeated numerics are not
    /// packed by default.
    Proto2,
    /// Singular scalars have implicit presence unless wrapped in a
    /// synthetic oneof; repeated numerics are packed by default.
    Proto3,
    /// Explicit presence by default, overridable per field; packed by
    /// default.
    Edition2023,
}

/// The closed set of field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Float,
    Double,
    Enum,
    String,
    Bytes,
    Message,
    /// Delimited message encoding: the payload is framed by start/end group
    /// tags instead of a length prefix.
    Group,
}

impl Kind {
    /// The wire type this kind's payload is framed with.
    pub fn wire_type(self) -> voltwire::wire::WireType {
        use voltwire::wire::WireType;
        match self {
            Kind::Bool
            | Kind::Int32
            | Kind::Int64
            | Kind::Uint32
            | Kind::Uint64
            | Kind::Sint32
            | Kind::Sint64
            | Kind::Enum => WireType::Varint,
            Kind::Fixed32 | Kind::Sfixed32 | Kind::Float => WireType::Fixed32,
            Kind::Fixed64 | Kind::Sfixed64 | Kind::Double => WireType::Fixed64,
            Kind::String | Kind::Bytes | Kind::Message => WireType::LengthDelimited,
            Kind::Group => WireType::StartGroup,
        }
    }

    /// Whether repeated occurrences may be packed into one
    /// length-delimited run.
    pub fn packable(self) -> bool {
        !matches!(self, Kind::String | Kind::Bytes | Kind::Message | Kind::Group)
    }

    /// Payload width for the two fixed wire types.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Kind::Fixed32 | Kind::Sfixed32 | Kind::Float => Some(4),
            Kind::Fixed64 | Kind::Sfixed64 | Kind::Double => Some(8),
            _ => None,
        }
    }

    /// Whether the kind is allowed as a map key.
    pub fn valid_map_key(self) -> bool {
        matches!(
            self,
            Kind::Bool
                | Kind::Int32
                | Kind::Int64
                | Kind::Uint32
                | Kind::Uint64
                | Kind::Sint32
                | Kind::Sint64
                | Kind::Fixed32
                | Kind::Fixed64
                | Kind::Sfixed32
                | Kind::Sfixed64
                | Kind::String
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Repeated,
}

/// One schema file: the unit of generation.
#[derive(Debug, Clone)]
pub struct FileSchema {
    /// Dotted package name, used to resolve fully-qualified type names.
    pub package: String,
    pub edition: Edition,
    pub messages: Vec<MessageSchema>,
}

#[derive(Debug, Clone)]
pub struct MessageSchema {
    pub name: String,
    /// Declaration order is meaningful: every generated walk follows it.
    pub fields: Vec<FieldSchema>,
    pub oneofs: Vec<OneofSchema>,
    pub nested: Vec<MessageSchema>,
    /// Synthetic two-field submessage backing a map field.
    pub map_entry: bool,
    /// Schema annotation opting this message into instance pooling.
    pub pooled: bool,
    /// Schema annotation forcing unknown fields to be discarded for this
    /// message regardless of the configured policy.
    pub ignore_unknown: bool,
}

impl MessageSchema {
    pub fn new(name: impl Into<String>) -> Self {
        MessageSchema {
            name: name.into(),
            fields: Vec::new(),
            oneofs: Vec::new(),
            nested: Vec::new(),
            map_entry: false,
            pooled: false,
            ignore_unknown: false,
        }
    }
}

/// A oneof group declared on a message. Member fields point back at it via
/// [`FieldSchema::oneof_index`].
#[derive(Debug, Clone)]
pub struct OneofSchema {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: String,
    pub number: u32,
    pub kind: Kind,
    pub cardinality: Cardinality,
    /// Fully-qualified target type for message/group kinds, resolved
    /// file-locally (e.g. `"demo.Outer.Inner"`).
    pub type_name: Option<String>,
    /// Index into the enclosing message's oneof list.
    pub oneof_index: Option<usize>,
    /// Implicit presence implemented as a single-member oneof; classified
    /// as explicit presence.
    pub synthetic_oneof: bool,
    /// Editions per-field presence override: `Some(false)` selects
    /// implicit presence.
    pub explicit_presence: Option<bool>,
    /// Packed-encoding override for repeated numeric fields.
    pub packed: Option<bool>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, number: u32, kind: Kind) -> Self {
        FieldSchema {
            name: name.into(),
            number,
            kind,
            cardinality: Cardinality::Singular,
            type_name: None,
            oneof_index: None,
            synthetic_oneof: false,
            explicit_presence: None,
            packed: None,
        }
    }

    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    pub fn typed(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn in_oneof(mut self, index: usize) -> Self {
        self.oneof_index = Some(index);
        self
    }

    pub fn optional(mut self) -> Self {
        self.synthetic_oneof = true;
        self
    }
}

//! Offline source generator for the voltwire wire format.
//!
//! Given a [`descriptor::FileSchema`] supplied by a host pipeline, the
//! generator classifies every field into a [`plan::FieldPlan`] and emits
//! specialized, reflection-free Rust for the configured feature set:
//! message structs and oneof enums, exact-size calculation, tail-backward
//! encoding, merge-based decoding and instance pooling. The emitted code
//! depends only on the `voltwire` runtime crate.
//!
//! Generation is a single-threaded, single-pass walk per input file;
//! schema errors (a malformed map entry, a dangling type or oneof
//! reference) abort the whole file with no partial output.
//!
//! ```
//! use voltwire_codegen::{
//!     descriptor::{Edition, FieldSchema, FileSchema, Kind, MessageSchema},
//!     Config, Generator,
//! };
//!
//! let mut message = MessageSchema::new("Ping");
//! message.fields.push(FieldSchema::new("seq", 1, Kind::Uint64));
//! let file = FileSchema {
//!     package: "demo".into(),
//!     edition: Edition::Proto3,
//!     messages: vec![message],
//! };
//!
//! let generator = Generator::new(Config::default()).unwrap();
//! let source = generator.generate_file(&file).unwrap();
//! assert!(source.contains("pub struct Ping"));
//! assert!(source.contains("fn encoded_len"));
//! ```
use {proc_macro2::TokenStream, std::collections::BTreeSet, thiserror::Error};

mod common;
mod decode;
pub mod descriptor;
mod encode;
mod names;
pub mod plan;
mod pool;
mod size;
mod types;

/// Which generators run per message.
///
/// The features compose without ordering dependencies: each one's output
/// only calls the others' public operations. Equality and clone are
/// mechanical derive mappings over the same field plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    pub size: bool,
    pub encode: bool,
    pub decode: bool,
    pub pool: bool,
    pub equal: bool,
    pub clone: bool,
}

impl FeatureSet {
    pub const fn full() -> Self {
        FeatureSet {
            size: true,
            encode: true,
            decode: true,
            pool: true,
            equal: true,
            clone: true,
        }
    }

    pub const fn none() -> Self {
        FeatureSet {
            size: false,
            encode: false,
            decode: false,
            pool: false,
            equal: false,
            clone: false,
        }
    }

    fn validate(&self) -> Result<(), GenerateError> {
        // Encoders fill a buffer pre-sized by encoded_len; one cannot be
        // generated without the other.
        if self.encode && !self.size {
            return Err(GenerateError::EncodeRequiresSize);
        }
        Ok(())
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        FeatureSet::full()
    }
}

/// Pool eligibility lists, keyed by fully-qualified message name. The
/// exclude list wins over the include list; both win over the per-message
/// schema annotation.
#[derive(Debug, Clone, Default)]
pub struct PoolConfig {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

/// What decode does with unrecognized fields. Mutually exclusive per
/// message; the per-message `ignore_unknown` annotation forces `Discard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldsPolicy {
    /// Keep unrecognized fields as opaque bytes and re-emit them on
    /// encode.
    #[default]
    Retain,
    /// Silently drop unrecognized fields.
    Discard,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub features: FeatureSet,
    pub pool: PoolConfig,
    pub unknown_fields: UnknownFieldsPolicy,
}

/// Generation-time schema errors. All are fatal to the file being
/// generated; no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("message `{0}` is not defined in this file")]
    UnresolvedType(String),
    #[error("field `{field}` of `{message}` has a message kind but no type name")]
    MissingTypeName { message: String, field: String },
    #[error("map entry `{0}` must hold exactly a singular key at 1 and a singular value at 2")]
    MalformedMapEntry(String),
    #[error("map entry `{0}` has a non-integral, non-string key kind")]
    InvalidMapKey(String),
    #[error("field `{field}` of `{message}` names oneof index {index}, which does not exist")]
    InvalidOneofIndex {
        message: String,
        field: String,
        index: usize,
    },
    #[error("the encode feature requires the size feature")]
    EncodeRequiresSize,
    #[error("emitted tokens failed to parse as a Rust file: {0}")]
    Render(String),
}

#[derive(Debug)]
pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Result<Self, GenerateError> {
        config.features.validate()?;
        Ok(Generator { config })
    }

    /// Generate the token stream for one schema file: every non-map-entry
    /// message's types plus the configured feature impls, in declaration
    /// order.
    pub fn generate_tokens(
        &self,
        file: &descriptor::FileSchema,
    ) -> Result<TokenStream, GenerateError> {
        let planner = plan::Planner::new(file, &self.config);
        let plans = planner.plan_file()?;

        let mut out = TokenStream::new();
        let features = &self.config.features;
        for message in &plans {
            out.extend(types::emit(message, features));
            if features.size {
                out.extend(size::emit(message));
            }
            if features.encode {
                out.extend(encode::emit(message));
            }
            if features.decode {
                out.extend(decode::emit(message));
            }
            if features.pool && message.pooled {
                out.extend(pool::emit(message));
            }
        }
        Ok(out)
    }

    /// Generate one schema file as formatted Rust source with the
    /// generated-file header.
    pub fn generate_file(&self, file: &descriptor::FileSchema) -> Result<String, GenerateError> {
        let tokens = self.generate_tokens(file)?;
        let ast =
            syn::parse2::<syn::File>(tokens).map_err(|e| GenerateError::Render(e.to_string()))?;
        Ok(format!(
            "// Code generated by voltwire-codegen. DO NOT EDIT.\n// source: {}\n\n{}",
            file.package,
            prettyplease::unparse(&ast)
        ))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::descriptor::{Edition, FieldSchema, FileSchema, Kind, MessageSchema, OneofSchema},
    };

    fn covering_file() -> FileSchema {
        let mut entry = MessageSchema::new("MetaEntry");
        entry.map_entry = true;
        entry.fields = vec![
            FieldSchema::new("key", 1, Kind::String),
            FieldSchema::new("value", 2, Kind::Int32),
        ];

        let mut child = MessageSchema::new("Child");
        child.pooled = true;
        child.fields = vec![
            FieldSchema::new("id", 1, Kind::Uint64),
            FieldSchema::new("payload", 2, Kind::Bytes),
        ];

        let mut sample = MessageSchema::new("Sample");
        sample.pooled = true;
        sample.nested = vec![entry];
        sample.oneofs = vec![OneofSchema {
            name: "shape".into(),
        }];
        sample.fields = vec![
            FieldSchema::new("id", 1, Kind::Uint64),
            FieldSchema::new("name", 2, Kind::String),
            FieldSchema::new("values", 3, Kind::Sint64).repeated(),
            FieldSchema::new("scale", 4, Kind::Float).optional(),
            FieldSchema::new("nested", 5, Kind::Message).typed("demo.Child"),
            FieldSchema::new("children", 6, Kind::Message).repeated().typed("demo.Child"),
            FieldSchema::new("meta", 7, Kind::Message).repeated().typed("demo.Sample.MetaEntry"),
            FieldSchema::new("circle", 8, Kind::Double).in_oneof(0),
            FieldSchema::new("blob", 9, Kind::Bytes).in_oneof(0),
            FieldSchema::new("node", 10, Kind::Message).typed("demo.Child").in_oneof(0),
        ];

        FileSchema {
            package: "demo".into(),
            edition: Edition::Proto3,
            messages: vec![child, sample],
        }
    }

    #[test]
    fn full_feature_output_renders_and_covers_surface() {
        let generator = Generator::new(Config::default()).unwrap();
        let source = generator.generate_file(&covering_file()).unwrap();

        assert!(source.starts_with("// Code generated by voltwire-codegen. DO NOT EDIT."));
        assert!(source.contains("pub struct Sample"));
        assert!(source.contains("pub enum SampleShape"));
        assert!(source.contains("impl ::voltwire::WireSize for Sample"));
        assert!(source.contains("impl ::voltwire::WireWrite for Sample"));
        assert!(source.contains("impl ::voltwire::WireRead for Sample"));
        assert!(source.contains("impl ::voltwire::Recycle for Sample"));
        assert!(source.contains("static SAMPLE_POOL"));
        assert!(source.contains("fn reset_for_reuse"));
        // Map fields become associative containers, not entry structs.
        assert!(source.contains("::std::collections::HashMap<String, i32>"));
        assert!(!source.contains("struct SampleMetaEntry"));
    }

    #[test]
    fn features_select_which_impls_are_emitted() {
        let config = Config {
            features: FeatureSet {
                size: true,
                decode: true,
                ..FeatureSet::none()
            },
            ..Config::default()
        };
        let source = Generator::new(config)
            .unwrap()
            .generate_file(&covering_file())
            .unwrap();

        assert!(source.contains("impl ::voltwire::WireSize for Sample"));
        assert!(source.contains("impl ::voltwire::WireRead for Sample"));
        assert!(!source.contains("impl ::voltwire::WireWrite"));
        assert!(!source.contains("::voltwire::Pool"));
        assert!(!source.contains("derive(Clone, Debug, Default, PartialEq)"));
    }

    #[test]
    fn encode_without_size_is_rejected() {
        let config = Config {
            features: FeatureSet {
                encode: true,
                ..FeatureSet::none()
            },
            ..Config::default()
        };
        assert_eq!(
            Generator::new(config).unwrap_err(),
            GenerateError::EncodeRequiresSize
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = Generator::new(Config::default()).unwrap();
        let a = generator.generate_file(&covering_file()).unwrap();
        let b = generator.generate_file(&covering_file()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unresolved_type_fails_the_file() {
        let mut message = MessageSchema::new("M");
        message.fields = vec![FieldSchema::new("ghost", 1, Kind::Message).typed("demo.Ghost")];
        let file = FileSchema {
            package: "demo".into(),
            edition: Edition::Proto3,
            messages: vec![message],
        };
        let err = Generator::new(Config::default())
            .unwrap()
            .generate_tokens(&file)
            .unwrap_err();
        assert_eq!(err, GenerateError::UnresolvedType("demo.Ghost".into()));
    }

    #[test]
    fn pool_feature_respects_eligibility() {
        let mut config = Config::default();
        config.pool.exclude.insert("demo.Sample".into());
        let source = Generator::new(config)
            .unwrap()
            .generate_file(&covering_file())
            .unwrap();

        assert!(source.contains("static CHILD_POOL"));
        assert!(!source.contains("static SAMPLE_POOL"));
    }
}

//! The field classifier.
//!
//! [`Planner`] normalizes one raw [`FileSchema`](crate::descriptor::FileSchema)
//! into per-message [`MessagePlan`]s whose [`FieldPlan`]s are the single
//! source of truth every emitter walks. Classification happens once per
//! generation run; the plans are immutable afterwards, which is what keeps
//! the size, encode, decode and pool emitters agreeing on field ordering,
//! omission rules and ownership transfer.
use {
    crate::{
        descriptor::{Cardinality, Edition, FieldSchema, FileSchema, Kind, MessageSchema},
        names, Config, GenerateError,
    },
    std::collections::{BTreeMap, HashSet},
};

/// Presence mode of a singular field, resolved from schema-edition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The zero value is indistinguishable from absence and is omitted on
    /// the wire.
    Implicit,
    /// An optional slot distinguishes absence from zero; a present zero is
    /// still encoded.
    Explicit,
    /// Implicit presence implemented as a single-member oneof; behaves as
    /// explicit presence everywhere downstream.
    SyntheticOneof,
}

impl Presence {
    pub fn is_explicit(self) -> bool {
        matches!(self, Presence::Explicit | Presence::SyntheticOneof)
    }
}

/// Resolved reference to a message-typed field target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    /// Flattened Rust type name in the generated module.
    pub rust_name: String,
    /// Whether the target type is pool-eligible under the configured pool
    /// rules.
    pub pooled: bool,
    /// Whether the field slot needs heap indirection because the target
    /// can reach the enclosing message again.
    pub boxed: bool,
}

/// Classified view of a map field's synthetic entry message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPlan {
    pub key_kind: Kind,
    pub value_kind: Kind,
    pub value_message: Option<MessageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanCardinality {
    Singular,
    Repeated { packed: bool },
    Map(MapPlan),
}

/// Membership of a field in a (non-synthetic) oneof group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneofRef {
    /// Index into the enclosing [`MessagePlan::oneofs`].
    pub index: usize,
    pub enum_name: String,
    pub variant: String,
}

/// The classifier's output for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    pub name: String,
    pub number: u32,
    pub kind: Kind,
    pub cardinality: PlanCardinality,
    pub presence: Presence,
    pub oneof: Option<OneofRef>,
    /// Resolved target for message/group kinds (not populated for maps;
    /// see [`MapPlan::value_message`]).
    pub message: Option<MessageRef>,
}

impl FieldPlan {
    pub fn is_map(&self) -> bool {
        matches!(self.cardinality, PlanCardinality::Map(_))
    }

    pub fn is_repeated(&self) -> bool {
        matches!(self.cardinality, PlanCardinality::Repeated { .. })
    }
}

/// One oneof group of a message plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneofPlan {
    /// Struct field holding the group's single storage slot.
    pub field_name: String,
    pub enum_name: String,
    /// Indices into [`MessagePlan::fields`] of the member variants.
    pub members: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct MessagePlan {
    pub fq_name: String,
    pub rust_name: String,
    pub fields: Vec<FieldPlan>,
    pub oneofs: Vec<OneofPlan>,
    pub pooled: bool,
    /// Whether decode keeps unrecognized fields as opaque bytes for
    /// re-encoding (`false` means they are discarded).
    pub retain_unknown: bool,
}

/// One storage slot of a generated struct, in declaration order: either a
/// plain field or a whole oneof group (which occupies the position of its
/// first member).
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Field(&'a FieldPlan),
    Oneof(&'a OneofPlan),
}

impl MessagePlan {
    /// Walk the message's storage slots in declaration order, collapsing
    /// each oneof group into a single slot. Every emitter iterates this
    /// same sequence, which is what keeps their field ordering aligned.
    pub fn slots(&self) -> impl Iterator<Item = Slot<'_>> {
        self.fields.iter().enumerate().filter_map(|(i, field)| {
            match &field.oneof {
                None => Some(Slot::Field(field)),
                Some(_) => {
                    let group = self
                        .oneofs
                        .iter()
                        .find(|g| g.members.contains(&i))
                        .expect("oneof member without group");
                    (group.members[0] == i).then_some(Slot::Oneof(group))
                }
            }
        })
    }
}

pub(crate) struct Planner<'a> {
    file: &'a FileSchema,
    config: &'a Config,
    index: BTreeMap<String, &'a MessageSchema>,
}

impl<'a> Planner<'a> {
    pub(crate) fn new(file: &'a FileSchema, config: &'a Config) -> Self {
        let mut index = BTreeMap::new();
        for message in &file.messages {
            index_message(&mut index, &file.package, message);
        }
        Planner {
            file,
            config,
            index,
        }
    }

    /// Plan every non-map-entry message of the file, nested ones included,
    /// in declaration order.
    pub(crate) fn plan_file(&self) -> Result<Vec<MessagePlan>, GenerateError> {
        let mut plans = Vec::new();
        for message in &self.file.messages {
            self.plan_tree(&self.file.package, message, &mut plans)?;
        }
        Ok(plans)
    }

    fn plan_tree(
        &self,
        scope: &str,
        message: &MessageSchema,
        plans: &mut Vec<MessagePlan>,
    ) -> Result<(), GenerateError> {
        let fq = qualify(scope, &message.name);
        if !message.map_entry {
            plans.push(self.plan_message(&fq, message)?);
        }
        for nested in &message.nested {
            self.plan_tree(&fq, nested, plans)?;
        }
        Ok(())
    }

    fn plan_message(
        &self,
        fq: &str,
        message: &MessageSchema,
    ) -> Result<MessagePlan, GenerateError> {
        let rust_name = self.rust_name(fq);
        let mut fields = Vec::with_capacity(message.fields.len());
        for field in &message.fields {
            fields.push(self.classify(fq, message, &rust_name, field)?);
        }

        let mut oneofs = Vec::with_capacity(message.oneofs.len());
        for (index, oneof) in message.oneofs.iter().enumerate() {
            let members: Vec<usize> = fields
                .iter()
                .enumerate()
                .filter(|(_, f)| f.oneof.as_ref().is_some_and(|o| o.index == index))
                .map(|(i, _)| i)
                .collect();
            if members.is_empty() {
                continue;
            }
            oneofs.push(OneofPlan {
                field_name: oneof.name.clone(),
                enum_name: format!("{rust_name}{}", names::camel_case(&oneof.name)),
                members,
            });
        }

        Ok(MessagePlan {
            fq_name: fq.to_string(),
            rust_name,
            fields,
            oneofs,
            pooled: self.should_pool(fq),
            retain_unknown: !message.ignore_unknown
                && self.config.unknown_fields == crate::UnknownFieldsPolicy::Retain,
        })
    }

    /// Classify one field against its enclosing message's context.
    fn classify(
        &self,
        enclosing_fq: &str,
        enclosing: &MessageSchema,
        enclosing_rust: &str,
        field: &FieldSchema,
    ) -> Result<FieldPlan, GenerateError> {
        let oneof = match field.oneof_index {
            Some(index) if !field.synthetic_oneof => {
                let group = enclosing.oneofs.get(index).ok_or_else(|| {
                    GenerateError::InvalidOneofIndex {
                        message: enclosing_fq.to_string(),
                        field: field.name.clone(),
                        index,
                    }
                })?;
                Some(OneofRef {
                    index,
                    enum_name: format!("{enclosing_rust}{}", names::camel_case(&group.name)),
                    variant: names::camel_case(&field.name),
                })
            }
            _ => None,
        };

        // Map fields arrive as repeated fields of a map-entry message.
        if matches!(field.kind, Kind::Message | Kind::Group) {
            let target_fq = self.resolve(enclosing_fq, field)?;
            let target = self.index[&target_fq];
            if target.map_entry {
                if field.cardinality != Cardinality::Repeated || oneof.is_some() {
                    return Err(GenerateError::MalformedMapEntry(target_fq));
                }
                return Ok(FieldPlan {
                    name: field.name.clone(),
                    number: field.number,
                    kind: field.kind,
                    cardinality: PlanCardinality::Map(self.plan_map_entry(&target_fq, target)?),
                    presence: Presence::Implicit,
                    oneof: None,
                    message: None,
                });
            }

            let boxed = field.cardinality == Cardinality::Singular
                && self.reaches(&target_fq, enclosing_fq);
            let message = Some(MessageRef {
                rust_name: self.rust_name(&target_fq),
                pooled: self.should_pool(&target_fq),
                boxed,
            });
            return Ok(FieldPlan {
                name: field.name.clone(),
                number: field.number,
                kind: field.kind,
                cardinality: self.cardinality(field),
                presence: Presence::Explicit,
                oneof,
                message,
            });
        }

        let presence = if field.cardinality == Cardinality::Repeated || oneof.is_some() {
            Presence::Implicit
        } else if field.synthetic_oneof {
            Presence::SyntheticOneof
        } else {
            match self.file.edition {
                Edition::Proto2 => Presence::Explicit,
                Edition::Proto3 => Presence::Implicit,
                Edition::Edition2023 => match field.explicit_presence {
                    Some(false) => Presence::Implicit,
                    _ => Presence::Explicit,
                },
            }
        };

        Ok(FieldPlan {
            name: field.name.clone(),
            number: field.number,
            kind: field.kind,
            cardinality: self.cardinality(field),
            presence,
            oneof,
            message: None,
        })
    }

    fn cardinality(&self, field: &FieldSchema) -> PlanCardinality {
        match field.cardinality {
            Cardinality::Singular => PlanCardinality::Singular,
            Cardinality::Repeated => {
                let default_packed = field.kind.packable()
                    && !matches!(self.file.edition, Edition::Proto2);
                PlanCardinality::Repeated {
                    packed: field.kind.packable() && field.packed.unwrap_or(default_packed),
                }
            }
        }
    }

    /// Validate a map entry's synthesized shape and classify its key and
    /// value.
    fn plan_map_entry(
        &self,
        entry_fq: &str,
        entry: &MessageSchema,
    ) -> Result<MapPlan, GenerateError> {
        if entry.fields.len() != 2 {
            return Err(GenerateError::MalformedMapEntry(entry_fq.to_string()));
        }
        let key = entry
            .fields
            .iter()
            .find(|f| f.number == 1)
            .ok_or_else(|| GenerateError::MalformedMapEntry(entry_fq.to_string()))?;
        let value = entry
            .fields
            .iter()
            .find(|f| f.number == 2)
            .ok_or_else(|| GenerateError::MalformedMapEntry(entry_fq.to_string()))?;
        if key.cardinality != Cardinality::Singular || value.cardinality != Cardinality::Singular {
            return Err(GenerateError::MalformedMapEntry(entry_fq.to_string()));
        }
        if !key.kind.valid_map_key() {
            return Err(GenerateError::InvalidMapKey(entry_fq.to_string()));
        }

        let value_message = match value.kind {
            Kind::Group => return Err(GenerateError::MalformedMapEntry(entry_fq.to_string())),
            Kind::Message => {
                let target_fq = self.resolve(entry_fq, value)?;
                let target = self.index[&target_fq];
                if target.map_entry {
                    return Err(GenerateError::MalformedMapEntry(entry_fq.to_string()));
                }
                Some(MessageRef {
                    rust_name: self.rust_name(&target_fq),
                    pooled: self.should_pool(&target_fq),
                    boxed: false,
                })
            }
            _ => None,
        };

        Ok(MapPlan {
            key_kind: key.kind,
            value_kind: value.kind,
            value_message,
        })
    }

    /// Resolve a field's type name against the file-local index.
    fn resolve(&self, enclosing_fq: &str, field: &FieldSchema) -> Result<String, GenerateError> {
        let name = field
            .type_name
            .as_deref()
            .ok_or_else(|| GenerateError::MissingTypeName {
                message: enclosing_fq.to_string(),
                field: field.name.clone(),
            })?;
        let fq = name.trim_start_matches('.').to_string();
        if self.index.contains_key(&fq) {
            Ok(fq)
        } else {
            Err(GenerateError::UnresolvedType(fq))
        }
    }

    /// Pool eligibility: the exclude list wins over the include list, which
    /// wins over the per-message schema annotation. Map entries never pool.
    pub(crate) fn should_pool(&self, fq: &str) -> bool {
        let Some(message) = self.index.get(fq) else {
            return false;
        };
        if message.map_entry || self.config.pool.exclude.contains(fq) {
            return false;
        }
        if self.config.pool.include.contains(fq) {
            return true;
        }
        message.pooled
    }

    /// Whether `from` can reach `to` through message-typed fields
    /// (including map values). Used to decide heap indirection for
    /// recursive schemas.
    fn reaches(&self, from: &str, to: &str) -> bool {
        let mut visited = HashSet::new();
        let mut stack = vec![from.to_string()];
        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if !visited.insert(current.clone()) {
                continue;
            }
            let Some(message) = self.index.get(&current) else {
                continue;
            };
            for field in &message.fields {
                if matches!(field.kind, Kind::Message | Kind::Group) {
                    if let Some(name) = &field.type_name {
                        stack.push(name.trim_start_matches('.').to_string());
                    }
                }
            }
        }
        false
    }

    fn rust_name(&self, fq: &str) -> String {
        let local = fq
            .strip_prefix(&self.file.package)
            .map(|rest| rest.trim_start_matches('.'))
            .unwrap_or(fq);
        local.split('.').collect::<Vec<_>>().join("")
    }
}

fn index_message<'a>(
    index: &mut BTreeMap<String, &'a MessageSchema>,
    scope: &str,
    message: &'a MessageSchema,
) {
    let fq = qualify(scope, &message.name);
    for nested in &message.nested {
        index_message(index, &fq, nested);
    }
    index.insert(fq, message);
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

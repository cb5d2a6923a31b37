// Code generated by voltwire-codegen. DO NOT EDIT.
// source: sample

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scalars {
    pub double_field: f64,
    pub float_field: f32,
    pub int32_field: i32,
    pub int64_field: i64,
    pub uint32_field: u32,
    pub uint64_field: u64,
    pub sint32_field: i32,
    pub sint64_field: i64,
    pub fixed32_field: u32,
    pub fixed64_field: u64,
    pub sfixed32_field: i32,
    pub sfixed64_field: i64,
    pub bool_field: bool,
    pub string_field: String,
    pub bytes_field: Vec<u8>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Scalars {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for Scalars {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.double_field != 0.0 {
            n += 1 + 8;
        }
        if self.float_field != 0.0 {
            n += 1 + 4;
        }
        if self.int32_field != 0 {
            n += 1 + ::voltwire::wire::varint_len((self.int32_field) as i64 as u64);
        }
        if self.int64_field != 0 {
            n += 1 + ::voltwire::wire::varint_len((self.int64_field) as u64);
        }
        if self.uint32_field != 0 {
            n += 1 + ::voltwire::wire::varint_len(u64::from(self.uint32_field));
        }
        if self.uint64_field != 0 {
            n += 1 + ::voltwire::wire::varint_len(self.uint64_field);
        }
        if self.sint32_field != 0 {
            n += 1
                + ::voltwire::wire::varint_len(u64::from(::voltwire::wire::zigzag32(
                    self.sint32_field,
                )));
        }
        if self.sint64_field != 0 {
            n += 1 + ::voltwire::wire::varint_len(::voltwire::wire::zigzag64(self.sint64_field));
        }
        if self.fixed32_field != 0 {
            n += 1 + 4;
        }
        if self.fixed64_field != 0 {
            n += 1 + 8;
        }
        if self.sfixed32_field != 0 {
            n += 1 + 4;
        }
        if self.sfixed64_field != 0 {
            n += 1 + 8;
        }
        if self.bool_field {
            n += 1 + 1;
        }
        if !self.string_field.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.string_field.len());
        }
        if !self.bytes_field.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.bytes_field.len());
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Scalars {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if !self.bytes_field.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, &self.bytes_field);
            pos = ::voltwire::wire::put_varint(buf, pos, self.bytes_field.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                15,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.string_field.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, self.string_field.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, self.string_field.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                14,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if self.bool_field {
            pos = ::voltwire::wire::put_varint(buf, pos, u64::from(self.bool_field));
            pos = ::voltwire::wire::put_tag(buf, pos, 13, ::voltwire::wire::WireType::Varint);
        }
        if self.sfixed64_field != 0 {
            pos = ::voltwire::wire::put_fixed64(buf, pos, (self.sfixed64_field) as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 12, ::voltwire::wire::WireType::Fixed64);
        }
        if self.sfixed32_field != 0 {
            pos = ::voltwire::wire::put_fixed32(buf, pos, (self.sfixed32_field) as u32);
            pos = ::voltwire::wire::put_tag(buf, pos, 11, ::voltwire::wire::WireType::Fixed32);
        }
        if self.fixed64_field != 0 {
            pos = ::voltwire::wire::put_fixed64(buf, pos, self.fixed64_field);
            pos = ::voltwire::wire::put_tag(buf, pos, 10, ::voltwire::wire::WireType::Fixed64);
        }
        if self.fixed32_field != 0 {
            pos = ::voltwire::wire::put_fixed32(buf, pos, self.fixed32_field);
            pos = ::voltwire::wire::put_tag(buf, pos, 9, ::voltwire::wire::WireType::Fixed32);
        }
        if self.sint64_field != 0 {
            pos = ::voltwire::wire::put_varint(
                buf,
                pos,
                ::voltwire::wire::zigzag64(self.sint64_field),
            );
            pos = ::voltwire::wire::put_tag(buf, pos, 8, ::voltwire::wire::WireType::Varint);
        }
        if self.sint32_field != 0 {
            pos = ::voltwire::wire::put_varint(
                buf,
                pos,
                u64::from(::voltwire::wire::zigzag32(self.sint32_field)),
            );
            pos = ::voltwire::wire::put_tag(buf, pos, 7, ::voltwire::wire::WireType::Varint);
        }
        if self.uint64_field != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, self.uint64_field);
            pos = ::voltwire::wire::put_tag(buf, pos, 6, ::voltwire::wire::WireType::Varint);
        }
        if self.uint32_field != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, u64::from(self.uint32_field));
            pos = ::voltwire::wire::put_tag(buf, pos, 5, ::voltwire::wire::WireType::Varint);
        }
        if self.int64_field != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, (self.int64_field) as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 4, ::voltwire::wire::WireType::Varint);
        }
        if self.int32_field != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, (self.int32_field) as i64 as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 3, ::voltwire::wire::WireType::Varint);
        }
        if self.float_field != 0.0 {
            pos = ::voltwire::wire::put_fixed32(buf, pos, (self.float_field).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::Fixed32);
        }
        if self.double_field != 0.0 {
            pos = ::voltwire::wire::put_fixed64(buf, pos, (self.double_field).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Fixed64);
        }
        pos
    }
}

impl ::voltwire::WireRead for Scalars {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 1) => {
                    self.double_field =
                        f64::from_bits(::voltwire::wire::read_fixed64(data, &mut pos)?);
                }
                (2, 5) => {
                    self.float_field =
                        f32::from_bits(::voltwire::wire::read_fixed32(data, &mut pos)?);
                }
                (3, 0) => {
                    self.int32_field = (::voltwire::wire::read_varint(data, &mut pos)?) as i32;
                }
                (4, 0) => {
                    self.int64_field = (::voltwire::wire::read_varint(data, &mut pos)?) as i64;
                }
                (5, 0) => {
                    self.uint32_field = (::voltwire::wire::read_varint(data, &mut pos)?) as u32;
                }
                (6, 0) => {
                    self.uint64_field = ::voltwire::wire::read_varint(data, &mut pos)?;
                }
                (7, 0) => {
                    self.sint32_field = ::voltwire::wire::unzigzag32(
                        (::voltwire::wire::read_varint(data, &mut pos)?) as u32,
                    );
                }
                (8, 0) => {
                    self.sint64_field = ::voltwire::wire::unzigzag64(
                        ::voltwire::wire::read_varint(data, &mut pos)?,
                    );
                }
                (9, 5) => {
                    self.fixed32_field = ::voltwire::wire::read_fixed32(data, &mut pos)?;
                }
                (10, 1) => {
                    self.fixed64_field = ::voltwire::wire::read_fixed64(data, &mut pos)?;
                }
                (11, 5) => {
                    self.sfixed32_field =
                        (::voltwire::wire::read_fixed32(data, &mut pos)?) as i32;
                }
                (12, 1) => {
                    self.sfixed64_field =
                        (::voltwire::wire::read_fixed64(data, &mut pos)?) as i64;
                }
                (13, 0) => {
                    self.bool_field = (::voltwire::wire::read_varint(data, &mut pos)?) != 0;
                }
                (14, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.string_field.clear();
                    self.string_field.push_str(s);
                }
                (15, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.bytes_field.clear();
                    self.bytes_field.extend_from_slice(&data[pos..pos + len]);
                    pos += len;
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Child {
    pub id: u64,
    pub payload: Vec<u8>,
    pub tags: Vec<String>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Child {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for Child {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.id != 0 {
            n += 1 + ::voltwire::wire::varint_len(self.id);
        }
        if !self.payload.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.payload.len());
        }
        for v in &self.tags {
            n += 1 + ::voltwire::wire::len_delimited_len(v.len());
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Child {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        for v in self.tags.iter().rev() {
            pos = ::voltwire::wire::put_slice(buf, pos, v.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, v.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                3,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.payload.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, &self.payload);
            pos = ::voltwire::wire::put_varint(buf, pos, self.payload.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                2,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if self.id != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, self.id);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
        }
        pos
    }
}

impl ::voltwire::WireRead for Child {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 0) => {
                    self.id = ::voltwire::wire::read_varint(data, &mut pos)?;
                }
                (2, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.payload.clear();
                    self.payload.extend_from_slice(&data[pos..pos + len]);
                    pos += len;
                }
                (3, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.tags.push(s.to_owned());
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

static CHILD_POOL: ::voltwire::Pool<Child> = ::voltwire::Pool::new();

impl ::voltwire::Recycle for Child {
    fn reset_for_reuse(&mut self) {
        self.payload.clear();
        let payload = ::core::mem::take(&mut self.payload);
        self.tags.clear();
        let tags = ::core::mem::take(&mut self.tags);
        self.clear();
        self.payload = payload;
        self.tags = tags;
    }

    fn pool() -> &'static ::voltwire::Pool<Self> {
        &CHILD_POOL
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sample {
    pub id: u64,
    pub name: String,
    pub values: Vec<u64>,
    pub rates: Vec<f64>,
    pub labels: Vec<String>,
    pub payload: Vec<u8>,
    pub nested: Option<Child>,
    pub children: Vec<Child>,
    pub metadata: ::std::collections::HashMap<String, i32>,
    pub refs: ::std::collections::HashMap<u32, Child>,
    pub shape: Option<SampleShape>,
    pub seq: Vec<i32>,
    pub scale: Option<f32>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Sample {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// At most one variant is active at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleShape {
    Circle(f64),
    Label(String),
    Blob(Vec<u8>),
    Node(Child),
}

impl ::voltwire::WireSize for Sample {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.id != 0 {
            n += 1 + ::voltwire::wire::varint_len(self.id);
        }
        if !self.name.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.name.len());
        }
        if !self.values.is_empty() {
            let len = self
                .values
                .iter()
                .map(|&v| ::voltwire::wire::varint_len(v))
                .sum::<usize>();
            n += 1 + ::voltwire::wire::len_delimited_len(len);
        }
        if !self.rates.is_empty() {
            let len = self.rates.len() * 8;
            n += 1 + ::voltwire::wire::len_delimited_len(len);
        }
        for v in &self.labels {
            n += 1 + ::voltwire::wire::len_delimited_len(v.len());
        }
        if !self.payload.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.payload.len());
        }
        if let Some(m) = &self.nested {
            n += 1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
        }
        for m in &self.children {
            n += 1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
        }
        for (k, v) in &self.metadata {
            let len = 1
                + ::voltwire::wire::len_delimited_len(k.len())
                + 1
                + ::voltwire::wire::varint_len((*v) as i64 as u64);
            n += 1 + ::voltwire::wire::len_delimited_len(len);
        }
        for (k, v) in &self.refs {
            let len = 1
                + ::voltwire::wire::varint_len(u64::from(*k))
                + 1
                + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(v));
            n += 1 + ::voltwire::wire::len_delimited_len(len);
        }
        if let Some(value) = &self.shape {
            match value {
                SampleShape::Circle(_) => {
                    n += 1 + 8;
                }
                SampleShape::Label(value) => {
                    n += 1 + ::voltwire::wire::len_delimited_len(value.len());
                }
                SampleShape::Blob(value) => {
                    n += 1 + ::voltwire::wire::len_delimited_len(value.len());
                }
                SampleShape::Node(value) => {
                    n += 1
                        + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(
                            value,
                        ));
                }
            }
        }
        if !self.seq.is_empty() {
            let len = self
                .seq
                .iter()
                .map(|&v| ::voltwire::wire::varint_len(u64::from(::voltwire::wire::zigzag32(v))))
                .sum::<usize>();
            n += 1 + ::voltwire::wire::len_delimited_len(len);
        }
        if self.scale.is_some() {
            n += 2 + 4;
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Sample {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if let Some(v) = self.scale {
            pos = ::voltwire::wire::put_fixed32(buf, pos, (v).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 16, ::voltwire::wire::WireType::Fixed32);
        }
        if !self.seq.is_empty() {
            let end = pos;
            for &v in self.seq.iter().rev() {
                pos = ::voltwire::wire::put_varint(
                    buf,
                    pos,
                    u64::from(::voltwire::wire::zigzag32(v)),
                );
            }
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                15,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if let Some(value) = &self.shape {
            match value {
                SampleShape::Circle(value) => {
                    pos = ::voltwire::wire::put_fixed64(buf, pos, (*value).to_bits());
                    pos = ::voltwire::wire::put_tag(
                        buf,
                        pos,
                        11,
                        ::voltwire::wire::WireType::Fixed64,
                    );
                }
                SampleShape::Label(value) => {
                    pos = ::voltwire::wire::put_slice(buf, pos, value.as_bytes());
                    pos = ::voltwire::wire::put_varint(buf, pos, value.len() as u64);
                    pos = ::voltwire::wire::put_tag(
                        buf,
                        pos,
                        12,
                        ::voltwire::wire::WireType::LengthDelimited,
                    );
                }
                SampleShape::Blob(value) => {
                    pos = ::voltwire::wire::put_slice(buf, pos, value);
                    pos = ::voltwire::wire::put_varint(buf, pos, value.len() as u64);
                    pos = ::voltwire::wire::put_tag(
                        buf,
                        pos,
                        13,
                        ::voltwire::wire::WireType::LengthDelimited,
                    );
                }
                SampleShape::Node(value) => {
                    let end = pos;
                    pos = ::voltwire::WireWrite::write_backward(value, buf, pos);
                    pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
                    pos = ::voltwire::wire::put_tag(
                        buf,
                        pos,
                        14,
                        ::voltwire::wire::WireType::LengthDelimited,
                    );
                }
            }
        }
        for (k, v) in &self.refs {
            let entry_end = pos;
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(v, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                2,
                ::voltwire::wire::WireType::LengthDelimited,
            );
            pos = ::voltwire::wire::put_varint(buf, pos, u64::from(*k));
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
            pos = ::voltwire::wire::put_varint(buf, pos, (entry_end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                10,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        for (k, v) in &self.metadata {
            let entry_end = pos;
            pos = ::voltwire::wire::put_varint(buf, pos, (*v) as i64 as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::Varint);
            pos = ::voltwire::wire::put_slice(buf, pos, (*k).as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, (*k).len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                1,
                ::voltwire::wire::WireType::LengthDelimited,
            );
            pos = ::voltwire::wire::put_varint(buf, pos, (entry_end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                9,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        for m in self.children.iter().rev() {
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                8,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if let Some(m) = &self.nested {
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                7,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.payload.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, &self.payload);
            pos = ::voltwire::wire::put_varint(buf, pos, self.payload.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                6,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        for v in self.labels.iter().rev() {
            pos = ::voltwire::wire::put_slice(buf, pos, v.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, v.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                5,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.rates.is_empty() {
            let end = pos;
            for &v in self.rates.iter().rev() {
                pos = ::voltwire::wire::put_fixed64(buf, pos, (v).to_bits());
            }
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                4,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.values.is_empty() {
            let end = pos;
            for &v in self.values.iter().rev() {
                pos = ::voltwire::wire::put_varint(buf, pos, v);
            }
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                3,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if !self.name.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, self.name.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, self.name.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                2,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if self.id != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, self.id);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
        }
        pos
    }
}

impl ::voltwire::WireRead for Sample {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 0) => {
                    self.id = ::voltwire::wire::read_varint(data, &mut pos)?;
                }
                (2, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.name.clear();
                    self.name.push_str(s);
                }
                (3, 0) => {
                    self.values.push(::voltwire::wire::read_varint(data, &mut pos)?);
                }
                (3, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let end = pos + len;
                    while pos < end {
                        self.values
                            .push(::voltwire::wire::read_varint(&data[..end], &mut pos)?);
                    }
                }
                (4, 1) => {
                    self.rates
                        .push(f64::from_bits(::voltwire::wire::read_fixed64(data, &mut pos)?));
                }
                (4, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let end = pos + len;
                    while pos < end {
                        self.rates.push(f64::from_bits(::voltwire::wire::read_fixed64(
                            &data[..end],
                            &mut pos,
                        )?));
                    }
                }
                (5, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.labels.push(s.to_owned());
                }
                (6, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.payload.clear();
                    self.payload.extend_from_slice(&data[pos..pos + len]);
                    pos += len;
                }
                (7, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let m = self.nested.get_or_insert_with(::core::default::Default::default);
                    m.clear();
                    ::voltwire::WireRead::merge_scope(m, &data[pos..pos + len], None, depth + 1)?;
                    pos += len;
                }
                (8, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let mut m = Child::default();
                    ::voltwire::WireRead::merge_scope(
                        &mut m,
                        &data[pos..pos + len],
                        None,
                        depth + 1,
                    )?;
                    self.children.push(m);
                    pos += len;
                }
                (9, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let end = pos + len;
                    let mut key: String = ::core::default::Default::default();
                    let mut value: i32 = ::core::default::Default::default();
                    while pos < end {
                        let entry_tag = ::voltwire::wire::read_varint(&data[..end], &mut pos)?;
                        match entry_tag {
                            10 => {
                                let klen =
                                    ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
                                let s = ::core::str::from_utf8(&data[pos..pos + klen])
                                    .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                                key = s.to_owned();
                                pos += klen;
                            }
                            16 => {
                                value =
                                    (::voltwire::wire::read_varint(&data[..end], &mut pos)?) as i32;
                            }
                            _ => {
                                if entry_tag >> 3 == 0 {
                                    return Err(::voltwire::DecodeError::InvalidTag);
                                }
                                let entry_wt = (entry_tag & 0x7) as u32;
                                if entry_wt == 4 {
                                    return Err(::voltwire::DecodeError::UnexpectedEndGroup);
                                }
                                ::voltwire::wire::skip_field(&data[..end], &mut pos, entry_wt)?;
                            }
                        }
                    }
                    self.metadata.insert(key, value);
                }
                (10, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let end = pos + len;
                    let mut key: u32 = ::core::default::Default::default();
                    let mut value: Child = ::core::default::Default::default();
                    while pos < end {
                        let entry_tag = ::voltwire::wire::read_varint(&data[..end], &mut pos)?;
                        match entry_tag {
                            8 => {
                                key =
                                    (::voltwire::wire::read_varint(&data[..end], &mut pos)?) as u32;
                            }
                            18 => {
                                let vlen =
                                    ::voltwire::wire::read_len_prefix(&data[..end], &mut pos)?;
                                value.clear();
                                ::voltwire::WireRead::merge_scope(
                                    &mut value,
                                    &data[pos..pos + vlen],
                                    None,
                                    depth + 1,
                                )?;
                                pos += vlen;
                            }
                            _ => {
                                if entry_tag >> 3 == 0 {
                                    return Err(::voltwire::DecodeError::InvalidTag);
                                }
                                let entry_wt = (entry_tag & 0x7) as u32;
                                if entry_wt == 4 {
                                    return Err(::voltwire::DecodeError::UnexpectedEndGroup);
                                }
                                ::voltwire::wire::skip_field(&data[..end], &mut pos, entry_wt)?;
                            }
                        }
                    }
                    self.refs.insert(key, value);
                }
                (11, 1) => {
                    self.shape = Some(SampleShape::Circle(f64::from_bits(
                        ::voltwire::wire::read_fixed64(data, &mut pos)?,
                    )));
                }
                (12, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.shape = Some(SampleShape::Label(s.to_owned()));
                }
                (13, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.shape = Some(SampleShape::Blob(data[pos..pos + len].to_vec()));
                    pos += len;
                }
                (14, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let mut m = Child::default();
                    ::voltwire::WireRead::merge_scope(
                        &mut m,
                        &data[pos..pos + len],
                        None,
                        depth + 1,
                    )?;
                    self.shape = Some(SampleShape::Node(m));
                    pos += len;
                }
                (15, 0) => {
                    self.seq.push(::voltwire::wire::unzigzag32(
                        (::voltwire::wire::read_varint(data, &mut pos)?) as u32,
                    ));
                }
                (15, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let end = pos + len;
                    while pos < end {
                        self.seq.push(::voltwire::wire::unzigzag32(
                            (::voltwire::wire::read_varint(&data[..end], &mut pos)?) as u32,
                        ));
                    }
                }
                (16, 5) => {
                    self.scale = Some(f32::from_bits(::voltwire::wire::read_fixed32(
                        data, &mut pos,
                    )?));
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

static SAMPLE_POOL: ::voltwire::Pool<Sample> = ::voltwire::Pool::new();

impl ::voltwire::Recycle for Sample {
    fn reset_for_reuse(&mut self) {
        self.values.clear();
        let values = ::core::mem::take(&mut self.values);
        self.rates.clear();
        let rates = ::core::mem::take(&mut self.rates);
        self.labels.clear();
        let labels = ::core::mem::take(&mut self.labels);
        self.payload.clear();
        let payload = ::core::mem::take(&mut self.payload);
        if let Some(m) = self.nested.take() {
            ::voltwire::Recycle::recycle(m);
        }
        for m in self.children.drain(..) {
            ::voltwire::Recycle::recycle(m);
        }
        let children = ::core::mem::take(&mut self.children);
        self.seq.clear();
        let seq = ::core::mem::take(&mut self.seq);
        let shape = match self.shape.take() {
            Some(SampleShape::Blob(mut b)) => {
                b.clear();
                Some(SampleShape::Blob(b))
            }
            Some(SampleShape::Node(m)) => {
                ::voltwire::Recycle::recycle(m);
                None
            }
            _ => None,
        };
        self.clear();
        self.values = values;
        self.rates = rates;
        self.labels = labels;
        self.payload = payload;
        self.children = children;
        self.seq = seq;
        self.shape = shape;
    }

    fn pool() -> &'static ::voltwire::Pool<Self> {
        &SAMPLE_POOL
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tree {
    pub value: i64,
    pub left: Option<Box<Tree>>,
    pub right: Option<Box<Tree>>,
    pub children: Vec<Tree>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Tree {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for Tree {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.value != 0 {
            n += 1 + ::voltwire::wire::varint_len((self.value) as u64);
        }
        if let Some(m) = &self.left {
            n += 1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
        }
        if let Some(m) = &self.right {
            n += 1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
        }
        for m in &self.children {
            n += 1 + ::voltwire::wire::len_delimited_len(::voltwire::WireSize::encoded_len(m));
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Tree {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        for m in self.children.iter().rev() {
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                4,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if let Some(m) = &self.right {
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                3,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if let Some(m) = &self.left {
            let end = pos;
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_varint(buf, pos, (end - pos) as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                2,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if self.value != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, (self.value) as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
        }
        pos
    }
}

impl ::voltwire::WireRead for Tree {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 0) => {
                    self.value = (::voltwire::wire::read_varint(data, &mut pos)?) as i64;
                }
                (2, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let m = self.left.get_or_insert_with(::core::default::Default::default);
                    m.clear();
                    ::voltwire::WireRead::merge_scope(m, &data[pos..pos + len], None, depth + 1)?;
                    pos += len;
                }
                (3, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let m = self.right.get_or_insert_with(::core::default::Default::default);
                    m.clear();
                    ::voltwire::WireRead::merge_scope(m, &data[pos..pos + len], None, depth + 1)?;
                    pos += len;
                }
                (4, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let mut m = Tree::default();
                    ::voltwire::WireRead::merge_scope(
                        &mut m,
                        &data[pos..pos + len],
                        None,
                        depth + 1,
                    )?;
                    self.children.push(m);
                    pos += len;
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub id: u64,
    pub note: String,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Header {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for Header {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.id != 0 {
            n += 1 + ::voltwire::wire::varint_len(self.id);
        }
        if !self.note.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.note.len());
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Header {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if !self.note.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, self.note.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, self.note.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                2,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        if self.id != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, self.id);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
        }
        pos
    }
}

impl ::voltwire::WireRead for Header {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 0) => {
                    self.id = ::voltwire::wire::read_varint(data, &mut pos)?;
                }
                (2, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.note.clear();
                    self.note.push_str(s);
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub header: Option<Header>,
    pub trailers: Vec<Header>,
    pub body: Vec<u8>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl Frame {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for Frame {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if let Some(m) = &self.header {
            n += 2 + ::voltwire::WireSize::encoded_len(m);
        }
        for m in &self.trailers {
            n += 2 + ::voltwire::WireSize::encoded_len(m);
        }
        if !self.body.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.body.len());
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for Frame {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if !self.body.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, &self.body);
            pos = ::voltwire::wire::put_varint(buf, pos, self.body.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                3,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        for m in self.trailers.iter().rev() {
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::EndGroup);
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::StartGroup);
        }
        if let Some(m) = &self.header {
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::EndGroup);
            pos = ::voltwire::WireWrite::write_backward(m, buf, pos);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::StartGroup);
        }
        pos
    }
}

impl ::voltwire::WireRead for Frame {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag_start = pos;
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 3) => {
                    let m = self.header.get_or_insert_with(::core::default::Default::default);
                    m.clear();
                    let used =
                        ::voltwire::WireRead::merge_scope(m, &data[pos..], Some(1), depth + 1)?;
                    pos += used;
                }
                (2, 3) => {
                    let mut m = Header::default();
                    let used = ::voltwire::WireRead::merge_scope(
                        &mut m,
                        &data[pos..],
                        Some(2),
                        depth + 1,
                    )?;
                    self.trailers.push(m);
                    pos += used;
                }
                (3, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    self.body.clear();
                    self.body.extend_from_slice(&data[pos..pos + len]);
                    pos += len;
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                    self.unknown_fields.extend_from_slice(&data[tag_start..pos]);
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoUnknown {
    pub id: u64,
}

impl NoUnknown {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for NoUnknown {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if self.id != 0 {
            n += 1 + ::voltwire::wire::varint_len(self.id);
        }
        n
    }
}

impl ::voltwire::WireWrite for NoUnknown {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        if self.id != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, self.id);
            pos = ::voltwire::wire::put_tag(buf, pos, 1, ::voltwire::wire::WireType::Varint);
        }
        pos
    }
}

impl ::voltwire::WireRead for NoUnknown {
    fn merge_scope(
        &mut self,
        data: &[u8],
        end_group: Option<u32>,
        depth: usize,
    ) -> ::voltwire::DecodeResult<usize> {
        if depth >= ::voltwire::wire::RECURSION_LIMIT {
            return Err(::voltwire::DecodeError::RecursionLimit);
        }
        let mut pos = 0usize;
        while pos < data.len() {
            let tag = ::voltwire::wire::read_varint(data, &mut pos)?;
            let number = (tag >> 3) as u32;
            let wire_type = (tag & 0x7) as u32;
            if number == 0 {
                return Err(::voltwire::DecodeError::InvalidTag);
            }
            if wire_type == 4 {
                return match end_group {
                    Some(open) if open == number => Ok(pos),
                    _ => Err(::voltwire::DecodeError::UnexpectedEndGroup),
                };
            }
            match (number, wire_type) {
                (1, 0) => {
                    self.id = ::voltwire::wire::read_varint(data, &mut pos)?;
                }
                _ => {
                    ::voltwire::wire::skip_field(data, &mut pos, wire_type)?;
                }
            }
        }
        if end_group.is_some() {
            return Err(::voltwire::DecodeError::Truncated);
        }
        Ok(pos)
    }
}

// Code generated by voltwire-codegen. DO NOT EDIT.
// source: editions

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImplicitPresence {
    pub currency_code: String,
    pub units: i64,
    pub scale: i32,
    pub is_active: bool,
    pub rate: f32,
    pub amount: f64,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl ImplicitPresence {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for ImplicitPresence {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if !self.currency_code.is_empty() {
            n += 1 + ::voltwire::wire::len_delimited_len(self.currency_code.len());
        }
        if self.units != 0 {
            n += 1 + ::voltwire::wire::varint_len((self.units) as u64);
        }
        if self.scale != 0 {
            n += 1 + ::voltwire::wire::varint_len((self.scale) as i64 as u64);
        }
        if self.is_active {
            n += 1 + 1;
        }
        if self.rate != 0.0 {
            n += 1 + 4;
        }
        if self.amount != 0.0 {
            n += 1 + 8;
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for ImplicitPresence {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if self.amount != 0.0 {
            pos = ::voltwire::wire::put_fixed64(buf, pos, (self.amount).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 6, ::voltwire::wire::WireType::Fixed64);
        }
        if self.rate != 0.0 {
            pos = ::voltwire::wire::put_fixed32(buf, pos, (self.rate).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 5, ::voltwire::wire::WireType::Fixed32);
        }
        if self.is_active {
            pos = ::voltwire::wire::put_varint(buf, pos, u64::from(self.is_active));
            pos = ::voltwire::wire::put_tag(buf, pos, 4, ::voltwire::wire::WireType::Varint);
        }
        if self.scale != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, (self.scale) as i64 as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 3, ::voltwire::wire::WireType::Varint);
        }
        if self.units != 0 {
            pos = ::voltwire::wire::put_varint(buf, pos, (self.units) as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::Varint);
        }
        if !self.currency_code.is_empty() {
            pos = ::voltwire::wire::put_slice(buf, pos, self.currency_code.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, self.currency_code.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                1,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        pos
    }
}

impl ::voltwire::WireRead for ImplicitPresence {
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
                (1, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    self.currency_code.clear();
                    self.currency_code.push_str(s);
                }
                (2, 0) => {
                    self.units = (::voltwire::wire::read_varint(data, &mut pos)?) as i64;
                }
                (3, 0) => {
                    self.scale = (::voltwire::wire::read_varint(data, &mut pos)?) as i32;
                }
                (4, 0) => {
                    self.is_active = (::voltwire::wire::read_varint(data, &mut pos)?) != 0;
                }
                (5, 5) => {
                    self.rate = f32::from_bits(::voltwire::wire::read_fixed32(data, &mut pos)?);
                }
                (6, 1) => {
                    self.amount = f64::from_bits(::voltwire::wire::read_fixed64(data, &mut pos)?);
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
pub struct ExplicitPresence {
    pub currency_code: Option<String>,
    pub units: Option<i64>,
    pub scale: Option<i32>,
    pub is_active: Option<bool>,
    pub rate: Option<f32>,
    pub amount: Option<f64>,
    /// Unrecognized fields retained as opaque bytes for faithful
    /// re-encoding.
    pub unknown_fields: Vec<u8>,
}

impl ExplicitPresence {
    /// Clear every field back to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ::voltwire::WireSize for ExplicitPresence {
    fn encoded_len(&self) -> usize {
        let mut n = 0usize;
        if let Some(v) = &self.currency_code {
            n += 1 + ::voltwire::wire::len_delimited_len(v.len());
        }
        if let Some(v) = self.units {
            n += 1 + ::voltwire::wire::varint_len((v) as u64);
        }
        if let Some(v) = self.scale {
            n += 1 + ::voltwire::wire::varint_len((v) as i64 as u64);
        }
        if self.is_active.is_some() {
            n += 1 + 1;
        }
        if self.rate.is_some() {
            n += 1 + 4;
        }
        if self.amount.is_some() {
            n += 1 + 8;
        }
        n += self.unknown_fields.len();
        n
    }
}

impl ::voltwire::WireWrite for ExplicitPresence {
    fn write_backward(&self, buf: &mut [u8], pos: usize) -> usize {
        let mut pos = pos;
        pos = ::voltwire::wire::put_slice(buf, pos, &self.unknown_fields);
        if let Some(v) = self.amount {
            pos = ::voltwire::wire::put_fixed64(buf, pos, (v).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 6, ::voltwire::wire::WireType::Fixed64);
        }
        if let Some(v) = self.rate {
            pos = ::voltwire::wire::put_fixed32(buf, pos, (v).to_bits());
            pos = ::voltwire::wire::put_tag(buf, pos, 5, ::voltwire::wire::WireType::Fixed32);
        }
        if let Some(v) = self.is_active {
            pos = ::voltwire::wire::put_varint(buf, pos, u64::from(v));
            pos = ::voltwire::wire::put_tag(buf, pos, 4, ::voltwire::wire::WireType::Varint);
        }
        if let Some(v) = self.scale {
            pos = ::voltwire::wire::put_varint(buf, pos, (v) as i64 as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 3, ::voltwire::wire::WireType::Varint);
        }
        if let Some(v) = self.units {
            pos = ::voltwire::wire::put_varint(buf, pos, (v) as u64);
            pos = ::voltwire::wire::put_tag(buf, pos, 2, ::voltwire::wire::WireType::Varint);
        }
        if let Some(v) = &self.currency_code {
            pos = ::voltwire::wire::put_slice(buf, pos, v.as_bytes());
            pos = ::voltwire::wire::put_varint(buf, pos, v.len() as u64);
            pos = ::voltwire::wire::put_tag(
                buf,
                pos,
                1,
                ::voltwire::wire::WireType::LengthDelimited,
            );
        }
        pos
    }
}

impl ::voltwire::WireRead for ExplicitPresence {
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
                (1, 2) => {
                    let len = ::voltwire::wire::read_len_prefix(data, &mut pos)?;
                    let s = ::core::str::from_utf8(&data[pos..pos + len])
                        .map_err(|_| ::voltwire::DecodeError::InvalidUtf8)?;
                    pos += len;
                    let slot = self.currency_code.get_or_insert_with(String::new);
                    slot.clear();
                    slot.push_str(s);
                }
                (2, 0) => {
                    self.units = Some((::voltwire::wire::read_varint(data, &mut pos)?) as i64);
                }
                (3, 0) => {
                    self.scale = Some((::voltwire::wire::read_varint(data, &mut pos)?) as i32);
                }
                (4, 0) => {
                    self.is_active = Some((::voltwire::wire::read_varint(data, &mut pos)?) != 0);
                }
                (5, 5) => {
                    self.rate = Some(f32::from_bits(::voltwire::wire::read_fixed32(
                        data, &mut pos,
                    )?));
                }
                (6, 1) => {
                    self.amount = Some(f64::from_bits(::voltwire::wire::read_fixed64(
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

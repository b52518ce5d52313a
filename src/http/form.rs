use std::io;

/// An `application/x-www-form-urlencoded` body.
///
/// Pairs are stored encoded, the way they go over the wire. The `name` and
/// `value` accessors hand back decoded text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    encoded_names: Vec<String>,
    encoded_values: Vec<String>,
}

impl FormBody {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    pub fn builder() -> FormBuilder {
        FormBuilder::default()
    }

    /// Number of pairs.
    pub fn size(&self) -> usize {
        self.encoded_names.len()
    }

    pub fn encoded_name(&self, index: usize) -> &str {
        &self.encoded_names[index]
    }

    pub fn encoded_value(&self, index: usize) -> &str {
        &self.encoded_values[index]
    }

    pub fn name(&self, index: usize) -> String {
        decode(self.encoded_name(index))
    }

    pub fn value(&self, index: usize) -> String {
        decode(self.encoded_value(index))
    }

    pub fn write_to(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        for (i, (name, value)) in self
            .encoded_names
            .iter()
            .zip(&self.encoded_values)
            .enumerate()
        {
            if i > 0 {
                sink.write_all(b"&")?;
            }
            sink.write_all(name.as_bytes())?;
            sink.write_all(b"=")?;
            sink.write_all(value.as_bytes())?;
        }
        Ok(())
    }
}

/// `+` is a space; malformed escapes leave the text as it was.
fn decode(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[derive(Debug, Default)]
pub struct FormBuilder {
    names: Vec<String>,
    values: Vec<String>,
}

impl FormBuilder {
    /// Adds a pair, percent-encoding both sides.
    pub fn add(mut self, name: &str, value: &str) -> Self {
        self.names.push(urlencoding::encode(name).into_owned());
        self.values.push(urlencoding::encode(value).into_owned());
        self
    }

    /// Adds a pair the caller already encoded.
    pub fn add_encoded(mut self, name: &str, value: &str) -> Self {
        self.names.push(name.to_string());
        self.values.push(value.to_string());
        self
    }

    pub fn build(self) -> FormBody {
        FormBody {
            encoded_names: self.names,
            encoded_values: self.values,
        }
    }
}

/// Float list payload. The width is fixed for the whole file by the header.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatList {
	/// Values from a `0032` file.
	F32(Vec<f32>),
	/// Values from a `0064` file.
	F64(Vec<f64>),
}

impl FloatList {
	/// Number of elements.
	pub fn len(&self) -> usize {
		match self {
			Self::F32(values) => values.len(),
			Self::F64(values) => values.len(),
		}
	}

	/// Return `true` when the list holds no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Copy the values as single precision, narrowing `f64` input.
	pub fn to_f32_vec(&self) -> Vec<f32> {
		match self {
			Self::F32(values) => values.clone(),
			Self::F64(values) => values.iter().map(|value| *value as f32).collect(),
		}
	}
}

/// One positional element of a record body.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
	/// `IntegerList` payload.
	Integers(Vec<u32>),
	/// `FloatList` payload.
	Floats(FloatList),
	/// Single `String` payload, as raw bytes.
	String(Vec<u8>),
	/// Nested record owned by this field.
	Record(Box<Record>),
}

impl Field {
	/// Stable label for the active variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Integers(_) => "integer list",
			Self::Floats(_) => "float list",
			Self::String(_) => "string",
			Self::Record(_) => "record",
		}
	}
}

/// Generic named record decoded from the token stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	/// Record type name (for example `Mesh`).
	pub name: String,
	/// Instance label, empty when absent.
	pub optional_name: String,
	/// Body fields in source order.
	pub fields: Vec<Field>,
}

impl Record {
	/// Iterate nested records among this record's fields.
	pub fn child_records(&self) -> impl Iterator<Item = &Record> {
		self.fields.iter().filter_map(|field| match field {
			Field::Record(child) => Some(child.as_ref()),
			_ => None,
		})
	}

	/// Return the first nested record named `name`.
	pub fn find_child(&self, name: &str) -> Option<&Record> {
		self.child_records().find(|child| child.name == name)
	}

	/// Nesting depth: 1 for a record without nested records.
	pub fn depth(&self) -> usize {
		let mut max = 1;
		let mut stack = vec![(self, 1_usize)];
		while let Some((record, depth)) = stack.pop() {
			max = max.max(depth);
			stack.extend(record.child_records().map(|child| (child, depth + 1)));
		}
		max
	}

	/// Visit this record and all nested records depth-first, in source order.
	pub fn visit(&self, f: &mut impl FnMut(&Record, usize)) {
		let mut stack = vec![(self, 0_usize)];
		while let Some((record, depth)) = stack.pop() {
			f(record, depth);
			let children: Vec<_> = record.child_records().collect();
			stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
		}
	}
}

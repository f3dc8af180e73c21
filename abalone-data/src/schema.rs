use polars::prelude::*;

/// Column holding the ring count, the basis of the derived age.
pub const RINGS: &str = "Rings";

/// Name of the derived age column.
pub const AGE: &str = "Age";

/// Abalone age in years is estimated as ring count plus 1.5.
pub const AGE_OFFSET: f64 = 1.5;

/// The nine columns of the flat file, in file order.
pub const INPUT_COLUMNS: [&str; 9] = [
    "Sex",
    "Length",
    "Diameter",
    "Height",
    "Whole weight",
    "Shucked weight",
    "Viscera weight",
    "Shell weight",
    RINGS,
];

/// All ten columns of a loaded dataset: the file columns plus `Age`.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "Sex",
    "Length",
    "Diameter",
    "Height",
    "Whole weight",
    "Shucked weight",
    "Viscera weight",
    "Shell weight",
    RINGS,
    AGE,
];

/// Schema applied when parsing the headerless file: `Sex` is a single-letter
/// class marker, `Rings` an integer count, everything else a physical
/// measurement in Float64.
pub fn input_schema() -> Schema {
    Schema::from_iter([
        Field::new("Sex".into(), DataType::String),
        Field::new("Length".into(), DataType::Float64),
        Field::new("Diameter".into(), DataType::Float64),
        Field::new("Height".into(), DataType::Float64),
        Field::new("Whole weight".into(), DataType::Float64),
        Field::new("Shucked weight".into(), DataType::Float64),
        Field::new("Viscera weight".into(), DataType::Float64),
        Field::new("Shell weight".into(), DataType::Float64),
        Field::new(RINGS.into(), DataType::Int64),
    ])
}

// Column resolution over normalized header names.
//
// The date and time columns are required exactly by name; without them no
// timestamps can be built and the pipeline stops. Everything else is
// optional and degrades to an absent field.
use thiserror::Error;

pub const DATE_COL: &str = "crash_date";
pub const TIME_COL: &str = "crash_time";
pub const INJURED_COL: &str = "number_of_persons_injured";
pub const KILLED_COL: &str = "number_of_persons_killed";
pub const ON_STREET_COL: &str = "on_street_name";
pub const CROSS_STREET_COL: &str = "cross_street_name";

/// Vehicle-type naming varies between export versions, so that column is
/// matched by substring instead of exact name.
pub const VEHICLE_TYPE_HINT: &str = "vehicle_type";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column `{0}` is missing from the dataset")]
    MissingColumn(&'static str),
}

/// Whether a vehicle-type column exists in the source schema.
///
/// Absence is not an error: vehicle statistics simply stay empty, and the
/// presenter reports them as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleColumn {
    Present(usize),
    Absent,
}

impl VehicleColumn {
    pub fn is_present(&self) -> bool {
        matches!(self, VehicleColumn::Present(_))
    }
}

/// Indices of the semantic fields within a [`RawTable`](crate::loader::RawTable) row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub date: usize,
    pub time: usize,
    pub injured: Option<usize>,
    pub killed: Option<usize>,
    pub on_street: Option<usize>,
    pub cross_street: Option<usize>,
    pub vehicle_type: VehicleColumn,
}

/// Map normalized headers to the fields the pipeline needs.
///
/// Vehicle-type resolution picks the first header containing
/// [`VEHICLE_TYPE_HINT`] in header order.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, SchemaError> {
    let exact = |name: &'static str| headers.iter().position(|h| h.as_str() == name);
    let date = exact(DATE_COL).ok_or(SchemaError::MissingColumn(DATE_COL))?;
    let time = exact(TIME_COL).ok_or(SchemaError::MissingColumn(TIME_COL))?;
    let vehicle_type = match headers.iter().position(|h| h.contains(VEHICLE_TYPE_HINT)) {
        Some(i) => VehicleColumn::Present(i),
        None => VehicleColumn::Absent,
    };
    Ok(ColumnMap {
        date,
        time,
        injured: exact(INJURED_COL),
        killed: exact(KILLED_COL),
        on_street: exact(ON_STREET_COL),
        cross_street: exact(CROSS_STREET_COL),
        vehicle_type,
    })
}

use super::domain::PackageRecord;
use std::sync::OnceLock;

// package, employee, model, route, start, end, result, count, status, comments
const REFERENCE_ROWS: [[&str; 10]; 9] = [
    ["PKG003", "EMP008", "LX755", "SPEC_A01", "2025-10-13 09:03:15", "2025-10-13 09:03:55", "40 Minor Error", "15", "No", ""],
    ["PKG004", "EMP008", "LX750", "SPEC_C01", "2025-10-13 06:31:46", "2025-10-13 06:32:21", "35 Pass", "13", "No", ""],
    ["PKG005", "EMP001", "LX735", "SPEC_B01", "2025-10-13 07:28:47", "2025-10-13 07:29:45", "58 Pass", "15", "No", ""],
    ["PKG006", "EMP001", "LX726", "SPEC_C02", "2025-10-13 07:30:13", "2025-10-13 07:30:43", "48 Pass", "11", "No", ""],
    ["PKG607", "EMP018", "LX726", "SPEC_D01", "2025-10-13 06:51:31", "2025-10-13 06:52:56", "85 Pass", "15", "No", "Improved speed"],
    ["PKG608", "EMP012", "LX760", "SPEC_B02", "2025-10-13 06:48:33", "2025-10-13 06:49:19", "20 Minor Error", "17", "No", "missing one snack item"],
    ["PKG609", "EMP010", "LX760", "SPEC_B02", "2025-10-13 06:49:37", "2025-10-13 06:50:07", "63 Pass", "16", "No", ""],
    ["PKG610", "EMP012", "LX730", "SPEC_C02", "2025-10-13 08:07:00", "2025-10-13 08:07:41", "41 Pass", "13", "No", ""],
    ["PKG611", "EMP003", "LX760", "SPEC_B01", "2025-10-13 08:55:51", "2025-10-13 08:56:37", "46 Pass", "15", "No", ""],
];

/// Labeled records used as demo input and as ground truth for self-evaluation.
pub fn reference_dataset() -> &'static [PackageRecord] {
    static DATASET: OnceLock<Vec<PackageRecord>> = OnceLock::new();
    DATASET.get_or_init(|| REFERENCE_ROWS.iter().map(record_from_row).collect())
}

fn record_from_row(row: &[&str; 10]) -> PackageRecord {
    let [package_id, employee_id, model_code, route_code, start_time, end_time, result_label, count_field, status_flag, comments] =
        *row;

    PackageRecord {
        package_id: package_id.to_string(),
        employee_id: employee_id.to_string(),
        model_code: model_code.to_string(),
        route_code: route_code.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        result_label: result_label.to_string(),
        count_field: count_field.to_string(),
        status_flag: status_flag.to_string(),
        comments: comments.to_string(),
    }
}

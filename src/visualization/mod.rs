mod tables;

pub use tables::{
    format_forecast_summary, format_history_table, format_labor_table, format_land_use_detail,
    format_subdivision_table, print_forecast_summary, print_history_table, print_labor_table,
    print_land_use_detail, print_subdivision_table,
};

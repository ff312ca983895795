use tabled::{settings::Style, Table, Tabled};

/// Print rows as a markdown-style table, with a fallback line when there
/// is nothing to show.
pub fn print_table<T>(rows: &[T])
where
    T: Tabled + Clone,
{
    if rows.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table = Table::new(rows.to_vec()).with(Style::markdown()).to_string();
    println!("{}\n", table);
}

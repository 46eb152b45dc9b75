//! CLI command for the expense category tree

use crate::display::format_category_tree;
use crate::error::FinreportResult;
use crate::models::CategoryTree;
use crate::storage::LedgerSource;

/// Print the current two-level category tree
pub fn handle_categories_command<S: LedgerSource + ?Sized>(source: &S) -> FinreportResult<()> {
    let tree = CategoryTree::from_categories(source.list_all_categories()?)?;
    print!("{}", format_category_tree(&tree));
    Ok(())
}

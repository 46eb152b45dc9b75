//! Category display formatting
//!
//! Formats the expense category tree for terminal output.

use crate::models::CategoryTree;

/// Format categories as a tree: top-level names with their subcategories
pub fn format_category_tree(tree: &CategoryTree) -> String {
    if tree.is_empty() {
        return "No categories found.\n\nRun 'finreport init' to create default categories."
            .to_string();
    }

    let mut output = String::new();
    let roots = tree.roots();

    for (i, root) in roots.iter().enumerate() {
        output.push_str(&format!("{}\n", root.name));

        let children = tree.children(root.id);
        for (j, child) in children.iter().enumerate() {
            let is_last = j == children.len() - 1;
            let prefix = if is_last { "└── " } else { "├── " };
            output.push_str(&format!("  {}{}\n", prefix, child.name));
        }

        if i < roots.len() - 1 {
            output.push('\n');
        }
    }

    output
}

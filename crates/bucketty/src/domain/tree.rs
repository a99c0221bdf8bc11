use std::collections::HashMap;
use std::collections::HashSet;

/// A node in the materialized bucket tree.
#[derive(Debug)]
pub enum TreeNode {
    /// Leaf entry addressed by its full object key.
    File,
    /// Interior entry holding children in first-seen order.
    Folder(Folder),
}

/// Folder whose children preserve the order in which the listing first
/// mentioned them.
#[derive(Debug, Default)]
pub struct Folder {
    children: Vec<(String, TreeNode)>,
    positions: HashMap<String, usize>,
}

impl Folder {
    /// Creates an empty folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child node with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.positions
            .get(name)
            .map(|&position| &self.children[position].1)
    }

    /// Iterates children as `(name, node)` pairs in first-seen order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    /// Returns the number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether the folder has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the folder child with the given name, creating it if absent.
    ///
    /// An existing file leaf with the same name is replaced by the new
    /// folder: when the listing names a key both as a file and as a path
    /// prefix, the later mention wins.
    fn folder_entry(&mut self, name: &str) -> &mut Folder {
        let position = match self.positions.get(name) {
            Some(&position) => {
                if matches!(self.children[position].1, TreeNode::File) {
                    self.children[position].1 = TreeNode::Folder(Folder::new());
                }
                position
            }
            None => {
                self.children
                    .push((name.to_string(), TreeNode::Folder(Folder::new())));
                let position = self.children.len() - 1;
                self.positions.insert(name.to_string(), position);
                position
            }
        };

        let TreeNode::Folder(folder) = &mut self.children[position].1 else {
            unreachable!("entry at position was normalized to a folder above");
        };

        folder
    }

    /// Records a file leaf named `name`.
    ///
    /// A duplicate file mention is a no-op, and a name already taken by a
    /// folder keeps the folder: the prefix mention wins over the leaf.
    fn insert_file(&mut self, name: &str) {
        if self.positions.contains_key(name) {
            return;
        }

        self.children.push((name.to_string(), TreeNode::File));
        self.positions
            .insert(name.to_string(), self.children.len() - 1);
    }
}

impl PartialEq for Folder {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl Eq for Folder {}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TreeNode::File, TreeNode::File) => true,
            (TreeNode::Folder(left), TreeNode::Folder(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for TreeNode {}

/// Builds a folder tree from flat object keys.
///
/// Keys are split on `/`; every segment but the last becomes a folder and
/// the last becomes a file leaf. A trailing slash marks a folder without
/// creating a leaf, and empty interior segments are skipped. Runs in time
/// proportional to the total number of key segments.
pub fn build_tree<I, S>(keys: I) -> Folder
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Folder::new();

    for key in keys {
        insert_key(&mut root, key.as_ref());
    }

    root
}

fn insert_key(root: &mut Folder, key: &str) {
    let is_folder_marker = key.ends_with('/');
    let segments: Vec<&str> = key.split('/').filter(|segment| !segment.is_empty()).collect();
    let Some((last, prefix)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for segment in prefix {
        node = node.folder_entry(segment);
    }

    if is_folder_marker {
        node.folder_entry(last);
    } else {
        node.insert_file(last);
    }
}

/// One visible row of the flattened tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    /// Nesting depth, zero for top-level entries.
    pub depth: usize,
    /// Whether this row is a folder.
    pub is_folder: bool,
    /// Full key path without a trailing slash.
    pub key: String,
    /// Display name, the final path segment.
    pub name: String,
}

/// Projects the tree into display rows, descending only into folders whose
/// key is in `expanded`. Rows keep the tree's first-seen order.
pub fn flatten_visible(root: &Folder, expanded: &HashSet<String>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    flatten_into(root, expanded, "", 0, &mut rows);

    rows
}

fn flatten_into(
    folder: &Folder,
    expanded: &HashSet<String>,
    prefix: &str,
    depth: usize,
    rows: &mut Vec<TreeRow>,
) {
    for (name, node) in folder.children() {
        let key = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };

        match node {
            TreeNode::File => rows.push(TreeRow {
                depth,
                is_folder: false,
                key,
                name: name.to_string(),
            }),
            TreeNode::Folder(child) => {
                let descend = expanded.contains(&key);
                rows.push(TreeRow {
                    depth,
                    is_folder: true,
                    key: key.clone(),
                    name: name.to_string(),
                });
                if descend {
                    flatten_into(child, expanded, &key, depth + 1, rows);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(depth: usize, is_folder: bool, key: &str, name: &str) -> TreeRow {
        TreeRow {
            depth,
            is_folder,
            key: key.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_build_tree_empty_listing_yields_empty_root() {
        // Arrange
        let keys: Vec<String> = Vec::new();

        // Act
        let root = build_tree(keys);

        // Assert
        assert!(root.is_empty());
    }

    #[test]
    fn test_build_tree_nests_segments_into_folders() {
        // Arrange
        let keys = ["docs/guide/intro.txt", "docs/readme.md", "top.txt"];

        // Act
        let root = build_tree(keys);

        // Assert
        assert_eq!(root.len(), 2);
        let Some(TreeNode::Folder(docs)) = root.get("docs") else {
            panic!("docs should be a folder");
        };
        assert!(matches!(docs.get("guide"), Some(TreeNode::Folder(_))));
        assert!(matches!(docs.get("readme.md"), Some(TreeNode::File)));
        assert!(matches!(root.get("top.txt"), Some(TreeNode::File)));
    }

    #[test]
    fn test_build_tree_later_prefix_replaces_file_leaf() {
        // Arrange
        let keys = ["report", "report/2024.csv"];

        // Act
        let root = build_tree(keys);

        // Assert
        assert_eq!(root.len(), 1);
        let Some(TreeNode::Folder(report)) = root.get("report") else {
            panic!("report should have been promoted to a folder");
        };
        assert!(matches!(report.get("2024.csv"), Some(TreeNode::File)));
    }

    #[test]
    fn test_build_tree_file_mention_keeps_existing_folder() {
        // Arrange
        let keys = ["report/2024.csv", "report"];

        // Act
        let root = build_tree(keys);

        // Assert
        assert_eq!(root.len(), 1);
        assert!(matches!(root.get("report"), Some(TreeNode::Folder(_))));
    }

    #[test]
    fn test_build_tree_conflict_resolution_is_order_independent_in_shape() {
        // Arrange
        let forward = ["a", "a/b.txt"];
        let backward = ["a/b.txt", "a"];

        // Act
        let first = build_tree(forward);
        let second = build_tree(backward);

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_tree_reordered_input_builds_the_same_hierarchy() {
        // Arrange
        let forward = ["docs/a.txt", "docs/b/c.txt", "top.txt"];
        let backward = ["top.txt", "docs/b/c.txt", "docs/a.txt"];

        // Act
        let first = build_tree(forward);
        let second = build_tree(backward);

        // Assert — same parent/child relationships; only child order differs
        for root in [&first, &second] {
            assert_eq!(root.len(), 2);
            assert!(matches!(root.get("top.txt"), Some(TreeNode::File)));
            let Some(TreeNode::Folder(docs)) = root.get("docs") else {
                panic!("docs should be a folder");
            };
            assert_eq!(docs.len(), 2);
            assert!(matches!(docs.get("a.txt"), Some(TreeNode::File)));
            assert!(matches!(docs.get("b"), Some(TreeNode::Folder(_))));
        }
    }

    #[test]
    fn test_build_tree_trailing_slash_creates_folder_without_leaf() {
        // Arrange
        let keys = ["archive/"];

        // Act
        let root = build_tree(keys);

        // Assert
        let Some(TreeNode::Folder(archive)) = root.get("archive") else {
            panic!("archive should be a folder");
        };
        assert!(archive.is_empty());
    }

    #[test]
    fn test_build_tree_skips_empty_interior_segments() {
        // Arrange
        let keys = ["a//b.txt"];

        // Act
        let root = build_tree(keys);

        // Assert
        let Some(TreeNode::Folder(a)) = root.get("a") else {
            panic!("a should be a folder");
        };
        assert!(matches!(a.get("b.txt"), Some(TreeNode::File)));
    }

    #[test]
    fn test_build_tree_duplicate_file_key_is_a_no_op() {
        // Arrange
        let keys = ["x.txt", "x.txt"];

        // Act
        let root = build_tree(keys);

        // Assert
        assert_eq!(root.len(), 1);
        assert!(matches!(root.get("x.txt"), Some(TreeNode::File)));
    }

    #[test]
    fn test_flatten_visible_hides_children_of_collapsed_folders() {
        // Arrange
        let root = build_tree(["docs/guide.md", "docs/notes.txt", "top.txt"]);
        let expanded = HashSet::new();

        // Act
        let rows = flatten_visible(&root, &expanded);

        // Assert
        assert_eq!(
            rows,
            vec![
                row(0, true, "docs", "docs"),
                row(0, false, "top.txt", "top.txt"),
            ]
        );
    }

    #[test]
    fn test_flatten_visible_descends_into_expanded_folders() {
        // Arrange
        let root = build_tree(["docs/guide/intro.md", "docs/notes.txt"]);
        let expanded: HashSet<String> = ["docs".to_string()].into_iter().collect();

        // Act
        let rows = flatten_visible(&root, &expanded);

        // Assert
        assert_eq!(
            rows,
            vec![
                row(0, true, "docs", "docs"),
                row(1, true, "docs/guide", "guide"),
                row(1, false, "docs/notes.txt", "notes.txt"),
            ]
        );
    }

    #[test]
    fn test_flatten_visible_keeps_first_seen_order() {
        // Arrange
        let root = build_tree(["zebra.txt", "alpha/inner.txt", "middle.txt"]);
        let expanded = HashSet::new();

        // Act
        let rows = flatten_visible(&root, &expanded);

        // Assert
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["zebra.txt", "alpha", "middle.txt"]);
    }
}

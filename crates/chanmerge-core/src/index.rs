use std::collections::BTreeMap;

/// Fragment delimiter used by the acquisition software's filenames.
pub const DEFAULT_DELIMITER: char = '_';

/// Index one channel's files by their derived position key.
///
/// Only filenames containing `token` are retained. The position key is the
/// filename split on `delimiter`, with every fragment containing `token`
/// dropped, rejoined with `delimiter`. Files from different channels that
/// were acquired at the same stage position derive the same key once their
/// channel fragment is stripped.
///
/// The acquisition naming convention must keep the channel token in its own
/// delimiter-separated fragment; a token embedded in a larger fragment drops
/// that whole fragment, identifying text included.
///
/// When two filenames derive the same key, the later one (in input order)
/// silently replaces the earlier one.
pub fn build_index<I, S>(filenames: I, token: &str, delimiter: char) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sep = delimiter.to_string();
    let mut index = BTreeMap::new();

    for filename in filenames {
        let filename = filename.as_ref();
        if !filename.contains(token) {
            continue;
        }
        let key: Vec<&str> = filename
            .split(delimiter)
            .filter(|fragment| !fragment.contains(token))
            .collect();
        index.insert(key.join(&sep), filename.to_string());
    }

    index
}

//! Dataset sanity report for a published `redirects.json`.

use std::collections::HashMap;

use serde::Serialize;

use crate::entry::RedirectEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetReport {
    pub total: usize,
    /// Indices of entries whose `name` is absent or not a string.
    pub invalid_name: Vec<usize>,
    /// Indices of entries whose `target` is absent or not a string.
    pub invalid_target: Vec<usize>,
    /// Names that occur more than once, with their occurrence count.
    pub duplicate_names: Vec<(String, usize)>,
}

impl DatasetReport {
    pub fn is_clean(&self) -> bool {
        self.invalid_name.is_empty()
            && self.invalid_target.is_empty()
            && self.duplicate_names.is_empty()
    }
}

pub fn inspect(entries: &[RedirectEntry]) -> DatasetReport {
    let mut report = DatasetReport {
        total: entries.len(),
        ..Default::default()
    };
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        match entry.str_field("name") {
            Some(name) => {
                let count = seen.entry(name).or_insert(0);
                if *count == 0 {
                    order.push(name);
                }
                *count += 1;
            }
            None => report.invalid_name.push(i),
        }
        if entry.str_field("target").is_none() {
            report.invalid_target.push(i);
        }
    }

    report.duplicate_names = order
        .into_iter()
        .filter_map(|name| {
            let count = seen[name];
            (count > 1).then(|| (name.to_string(), count))
        })
        .collect();
    report
}

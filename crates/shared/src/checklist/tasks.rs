use crate::catalog::Catalog;
use crate::language::Language;

pub type TaskId = u32;

/// A fixed onboarding procedure. Display text lives in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub icon: &'static str,
}

pub const TASKS: [Task; 6] = [
    Task { id: 1, icon: "🪪" },
    Task { id: 2, icon: "🏦" },
    Task { id: 3, icon: "💡" },
    Task { id: 4, icon: "🚗" },
    Task { id: 5, icon: "🎓" },
    Task { id: 6, icon: "🏥" },
];

pub fn find(id: TaskId) -> Option<&'static Task> {
    TASKS.iter().find(|task| task.id == id)
}

pub fn is_known(id: TaskId) -> bool {
    find(id).is_some()
}

impl Task {
    fn field(&self, catalog: &Catalog, lang: Language, suffix: &str) -> String {
        let key = format!("task_{}_{}", self.id, suffix);
        catalog.text(lang, &key).to_string()
    }

    pub fn title(&self, catalog: &Catalog, lang: Language) -> String {
        self.field(catalog, lang, "title")
    }

    pub fn description(&self, catalog: &Catalog, lang: Language) -> String {
        self.field(catalog, lang, "desc")
    }

    pub fn documents(&self, catalog: &Catalog, lang: Language) -> String {
        self.field(catalog, lang, "docs")
    }

    pub fn location(&self, catalog: &Catalog, lang: Language) -> String {
        self.field(catalog, lang, "where")
    }

    pub fn fee(&self, catalog: &Catalog, lang: Language) -> String {
        self.field(catalog, lang, "fee")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = TASKS.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), TASKS.len());
    }

    #[test]
    fn every_task_has_english_text() {
        let catalog = Catalog::embedded();
        for task in &TASKS {
            for suffix in ["title", "desc", "docs", "where", "fee"] {
                let key = format!("task_{}_{}", task.id, suffix);
                assert!(catalog.get(Language::En, &key).is_some(), "missing {}", key);
            }
        }
    }

    #[test]
    fn partial_locale_falls_back_per_field() {
        let catalog = Catalog::embedded();
        let task = find(3).unwrap();
        assert_eq!(task.title(&catalog, Language::Ar), "تفعيل الكهرباء والمياه");
        assert_eq!(task.fee(&catalog, Language::Ar), task.fee(&catalog, Language::En));
    }
}

//! Built-in catalogs
//!
//! Literal values shown by the story form. The four context × page
//! combinations are assembled lazily, once per process.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::catalog::{Catalog, CatalogSet};
use crate::kind::{ContextMode, FieldKind, PageMode};

/// Literary genres
pub const GENRES: &[&str] = &[
    "Aventura",
    "Fantasía",
    "Misterio",
    "Ciencia Ficción",
    "Fábula",
    "Cuento Popular",
    "Biografía",
    "Histórico",
];

/// Educational themes
pub const EDUCATIONAL_CONTEXTS: &[&str] = &[
    "Valores y Convivencia",
    "Cuidado del Medio Ambiente",
    "Identidad y Cultura",
    "Ciencia y Descubrimiento",
    "Salud y Bienestar",
    "Historia y Tradiciones",
    "Ciudadanía y Derechos",
    "Emociones y Autoestima",
];

/// School grades, youngest first
pub const GRADE_LEVELS: &[&str] = &[
    "Inicial (3-5 años)",
    "Primaria 1° (6 años)",
    "Primaria 2° (7 años)",
    "Primaria 3° (8 años)",
    "Primaria 4° (9 años)",
    "Primaria 5° (10 años)",
    "Primaria 6° (11 años)",
    "Secundaria 1° (12 años)",
    "Secundaria 2° (13 años)",
    "Secundaria 3° (14 años)",
    "Secundaria 4° (15 años)",
    "Secundaria 5° (16 años)",
];

/// Page-count buckets
pub const PAGE_COUNT_BUCKETS: &[&str] = &[
    "1-5 páginas",
    "6-10 páginas",
    "11-15 páginas",
    "16-20 páginas",
    "21+ páginas",
];

/// Single-page extent buckets
pub const SINGLE_PAGE_BUCKETS: &[&str] = &[
    "Página corta (~100 palabras)",
    "Página media (~200 palabras)",
    "Página extensa (~300 palabras)",
];

/// Curricular competences
pub const COMPETENCES: &[&str] = &[
    "Lee diversos tipos de textos escritos en su lengua materna",
    "Escribe diversos tipos de textos en su lengua materna",
    "Se comunica oralmente en su lengua materna",
    "Resuelve problemas de cantidad",
    "Construye su identidad",
    "Convive y participa democráticamente",
    "Construye interpretaciones históricas",
    "Gestiona responsablemente el espacio y el ambiente",
];

/// Cross-curricular approaches
pub const TRANSVERSAL_APPROACHES: &[&str] = &[
    "Enfoque de Derechos",
    "Enfoque Inclusivo o de Atención a la Diversidad",
    "Enfoque Intercultural",
    "Enfoque Igualdad de Género",
    "Enfoque Ambiental",
    "Enfoque Orientación al Bien Común",
    "Enfoque Búsqueda de la Excelencia",
];

static GENRE_PAGE_COUNT: Lazy<Arc<CatalogSet>> =
    Lazy::new(|| Arc::new(assemble(ContextMode::Genre, PageMode::PageCount)));
static GENRE_SINGLE_PAGE: Lazy<Arc<CatalogSet>> =
    Lazy::new(|| Arc::new(assemble(ContextMode::Genre, PageMode::SinglePage)));
static EDUCATIONAL_PAGE_COUNT: Lazy<Arc<CatalogSet>> =
    Lazy::new(|| Arc::new(assemble(ContextMode::EducationalContext, PageMode::PageCount)));
static EDUCATIONAL_SINGLE_PAGE: Lazy<Arc<CatalogSet>> =
    Lazy::new(|| Arc::new(assemble(ContextMode::EducationalContext, PageMode::SinglePage)));

pub(crate) fn shared(context_mode: ContextMode, page_mode: PageMode) -> Arc<CatalogSet> {
    let set = match (context_mode, page_mode) {
        (ContextMode::Genre, PageMode::PageCount) => &GENRE_PAGE_COUNT,
        (ContextMode::Genre, PageMode::SinglePage) => &GENRE_SINGLE_PAGE,
        (ContextMode::EducationalContext, PageMode::PageCount) => &EDUCATIONAL_PAGE_COUNT,
        (ContextMode::EducationalContext, PageMode::SinglePage) => &EDUCATIONAL_SINGLE_PAGE,
    };
    Arc::clone(set)
}

fn assemble(context_mode: ContextMode, page_mode: PageMode) -> CatalogSet {
    let contexts = match context_mode {
        ContextMode::Genre => GENRES,
        ContextMode::EducationalContext => EDUCATIONAL_CONTEXTS,
    };
    let pages = match page_mode {
        PageMode::PageCount => PAGE_COUNT_BUCKETS,
        PageMode::SinglePage => SINGLE_PAGE_BUCKETS,
    };

    CatalogSet::new(
        context_mode,
        page_mode,
        Catalog::from_static(FieldKind::Context, contexts),
        Catalog::from_static(FieldKind::PageLength, pages),
        Catalog::from_static(FieldKind::GradeLevel, GRADE_LEVELS),
        Catalog::from_static(FieldKind::Competence, COMPETENCES),
        Catalog::from_static(FieldKind::TransversalApproach, TRANSVERSAL_APPROACHES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn literal_lists_have_no_duplicates() {
        for list in [
            GENRES,
            EDUCATIONAL_CONTEXTS,
            GRADE_LEVELS,
            PAGE_COUNT_BUCKETS,
            SINGLE_PAGE_BUCKETS,
            COMPETENCES,
            TRANSVERSAL_APPROACHES,
        ] {
            let unique: HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn modes_select_context_and_page_catalogs() {
        let edu = shared(ContextMode::EducationalContext, PageMode::SinglePage);
        assert!(edu.contains(FieldKind::Context, "Valores y Convivencia"));
        assert!(!edu.contains(FieldKind::Context, "Aventura"));
        assert!(edu.contains(FieldKind::PageLength, "Página media (~200 palabras)"));
        assert!(!edu.contains(FieldKind::PageLength, "6-10 páginas"));

        let genre = shared(ContextMode::Genre, PageMode::PageCount);
        assert!(genre.contains(FieldKind::Context, "Aventura"));
        assert!(genre.contains(FieldKind::PageLength, "6-10 páginas"));
    }

    #[test]
    fn shared_catalogs_are_identical_across_modes() {
        let a = shared(ContextMode::Genre, PageMode::PageCount);
        let b = shared(ContextMode::EducationalContext, PageMode::SinglePage);
        for kind in [FieldKind::GradeLevel, FieldKind::Competence, FieldKind::TransversalApproach] {
            assert_eq!(a.catalog(kind), b.catalog(kind));
        }
    }
}

//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity, used to filter coupon listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id_categoria")]
    pub id: String,
    #[serde(rename = "nom_categoria")]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Categories seeded by the backend on first start
    ///
    /// Offered by the merchant registration form, which does not load
    /// `/categorias`.
    pub fn seeded() -> Vec<Category> {
        [
            ("cat001", "Alimentação"),
            ("cat002", "Vestuário"),
            ("cat003", "Eletrônicos"),
            ("cat004", "Saúde e Beleza"),
            ("cat005", "Serviços"),
            ("cat006", "Outros"),
        ]
        .into_iter()
        .map(|(id, name)| Category::new(id, name))
        .collect()
    }
}

//! Products - `/api/productos`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Products;

/// Row of `productos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "nullable")]
    pub id_producto: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub nombre_productos: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub descripcion_productos: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub precio_producto: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub tiempo_preparacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub categoria: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductChanges {
    pub nombre_productos: Patch,
    pub descripcion_productos: Patch,
    pub precio_producto: Patch,
    pub tiempo_preparacion: Patch,
    pub categoria: Patch,
}

impl Record for Product {
    const COLUMNS: &'static [&'static str] = &[
        "id_producto",
        "nombre_productos",
        "descripcion_productos",
        "precio_producto",
        "tiempo_preparacion",
        "categoria",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_producto", self.id_producto),
            ("nombre_productos", self.nombre_productos),
            ("descripcion_productos", self.descripcion_productos),
            ("precio_producto", self.precio_producto),
            ("tiempo_preparacion", self.tiempo_preparacion),
            ("categoria", self.categoria),
        ]
    }
}

impl Changeset for ProductChanges {
    const COLUMNS: &'static [&'static str] = &[
        "nombre_productos",
        "descripcion_productos",
        "precio_producto",
        "tiempo_preparacion",
        "categoria",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("nombre_productos", self.nombre_productos),
            ("descripcion_productos", self.descripcion_productos),
            ("precio_producto", self.precio_producto),
            ("tiempo_preparacion", self.tiempo_preparacion),
            ("categoria", self.categoria),
        ]
    }
}

impl Resource for Products {
    type Record = Product;
    type Changes = ProductChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "productos",
        table: "productos",
        identity: "id_producto",
        required: &[
            "id_producto",
            "nombre_productos",
            "descripcion_productos",
            "precio_producto",
            "tiempo_preparacion",
            "categoria",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los productos",
            not_found: "producto no encontrado",
            get_failed: "Error al obtener el producto",
            invalid: "Nombre y precio son requeridos",
            create_failed: "Error al crear el producto",
            update_not_found: "Producto no encontrado ",
            updated: "Producto actualizado correctamente",
            update_failed: "Error al actualizar el producto",
            delete_not_found: "Producto no encontrado",
            deleted: "Producto eliminado corectamente",
            delete_failed: "Error al eliminar el producto",
        },
    };
}

//! Inventory - `/api/inventario`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Inventory;

/// Stock level of one product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    #[serde(deserialize_with = "nullable")]
    pub id_inventario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_producto: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub cantidad_disponible: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub unidad_medida: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_actualizacion: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub alerta_stock: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryChanges {
    pub id_producto: Patch,
    pub cantidad_disponible: Patch,
    pub unidad_medida: Patch,
    pub fecha_actualizacion: Patch,
    pub alerta_stock: Patch,
}

impl Record for InventoryItem {
    const COLUMNS: &'static [&'static str] = &[
        "id_inventario",
        "id_producto",
        "cantidad_disponible",
        "unidad_medida",
        "fecha_actualizacion",
        "alerta_stock",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_inventario", self.id_inventario),
            ("id_producto", self.id_producto),
            ("cantidad_disponible", self.cantidad_disponible),
            ("unidad_medida", self.unidad_medida),
            ("fecha_actualizacion", self.fecha_actualizacion),
            ("alerta_stock", self.alerta_stock),
        ]
    }
}

impl Changeset for InventoryChanges {
    const COLUMNS: &'static [&'static str] = &[
        "id_producto",
        "cantidad_disponible",
        "unidad_medida",
        "fecha_actualizacion",
        "alerta_stock",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_producto", self.id_producto),
            ("cantidad_disponible", self.cantidad_disponible),
            ("unidad_medida", self.unidad_medida),
            ("fecha_actualizacion", self.fecha_actualizacion),
            ("alerta_stock", self.alerta_stock),
        ]
    }
}

impl Resource for Inventory {
    type Record = InventoryItem;
    type Changes = InventoryChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "inventario",
        table: "inventario",
        identity: "id_inventario",
        required: &[
            "id_inventario",
            "id_producto",
            "cantidad_disponible",
            "unidad_medida",
            "fecha_actualizacion",
            "alerta_stock",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los datos del inventario",
            not_found: "inventario no encontrada",
            get_failed: "Error al obtener el inventario",
            invalid: "Datos requeridos obligaroriamente",
            create_failed: "Error al crear el inventario",
            update_not_found: "Inventario no encontrado ",
            updated: "Inventario actualizado correctamente",
            update_failed: "Error al actualizar el inventario",
            delete_not_found: "Inventario no encontrado",
            deleted: "Inventario eliminado corectamente",
            delete_failed: "Error al eliminar el inventario",
        },
    };
}

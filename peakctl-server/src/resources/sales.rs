//! Sales - `/api/venta`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Sales;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sale {
    #[serde(deserialize_with = "nullable")]
    pub id_venta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_venta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub total_venta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub comision: Option<Scalar>,
    /// Waiter who closed the sale
    #[serde(deserialize_with = "nullable")]
    pub mesero_encargado: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SaleChanges {
    pub id_usuario: Patch,
    pub fecha_venta: Patch,
    pub total_venta: Patch,
    pub comision: Patch,
    pub mesero_encargado: Patch,
}

impl Record for Sale {
    const COLUMNS: &'static [&'static str] = &[
        "id_venta",
        "id_usuario",
        "fecha_venta",
        "total_venta",
        "comision",
        "mesero_encargado",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_venta", self.id_venta),
            ("id_usuario", self.id_usuario),
            ("fecha_venta", self.fecha_venta),
            ("total_venta", self.total_venta),
            ("comision", self.comision),
            ("mesero_encargado", self.mesero_encargado),
        ]
    }
}

impl Changeset for SaleChanges {
    const COLUMNS: &'static [&'static str] = &[
        "id_usuario",
        "fecha_venta",
        "total_venta",
        "comision",
        "mesero_encargado",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_usuario", self.id_usuario),
            ("fecha_venta", self.fecha_venta),
            ("total_venta", self.total_venta),
            ("comision", self.comision),
            ("mesero_encargado", self.mesero_encargado),
        ]
    }
}

impl Resource for Sales {
    type Record = Sale;
    type Changes = SaleChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "venta",
        table: "venta",
        identity: "id_venta",
        required: &[
            "id_venta",
            "id_usuario",
            "fecha_venta",
            "total_venta",
            "comision",
            "mesero_encargado",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los datos de la venta",
            not_found: "venta no encontrada",
            get_failed: "Error al obtener la venta",
            invalid: "Datos requeridos",
            create_failed: "Error al crear la venta",
            update_not_found: "venta no encontrada ",
            updated: "Venta actualizada correctamente",
            update_failed: "Error al actualizar la venta",
            delete_not_found: "Venta no encontrada",
            deleted: "Venta eliminada corectamente",
            delete_failed: "Error al eliminar la venta",
        },
    };
}

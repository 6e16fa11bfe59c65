//! Inventory reports - `/api/informe_inventario`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct InventoryReports;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryReport {
    #[serde(deserialize_with = "nullable")]
    pub id_informe: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_inventario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_informe: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub descripcion_informe: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryReportChanges {
    pub id_inventario: Patch,
    pub fecha_informe: Patch,
    pub descripcion_informe: Patch,
}

impl Record for InventoryReport {
    const COLUMNS: &'static [&'static str] = &[
        "id_informe",
        "id_inventario",
        "fecha_informe",
        "descripcion_informe",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_informe", self.id_informe),
            ("id_inventario", self.id_inventario),
            ("fecha_informe", self.fecha_informe),
            ("descripcion_informe", self.descripcion_informe),
        ]
    }
}

impl Changeset for InventoryReportChanges {
    const COLUMNS: &'static [&'static str] =
        &["id_inventario", "fecha_informe", "descripcion_informe"];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_inventario", self.id_inventario),
            ("fecha_informe", self.fecha_informe),
            ("descripcion_informe", self.descripcion_informe),
        ]
    }
}

impl Resource for InventoryReports {
    type Record = InventoryReport;
    type Changes = InventoryReportChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "informe_inventario",
        table: "informe_inventario",
        identity: "id_informe",
        required: &[
            "id_informe",
            "id_inventario",
            "fecha_informe",
            "descripcion_informe",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los informes de inventario",
            not_found: "Informe no encontrado",
            get_failed: "Error al obtener el informe",
            invalid: "La descripcion es necesaria",
            create_failed: "Error al crear la descripcion del informe",
            update_not_found: "Informe no encontrado ",
            updated: "Informe de inventario actualizado correctamente",
            update_failed: "Error al actualizar el informe de inventario",
            delete_not_found: "Informe no encontrado",
            deleted: "Informe eliminado correctamente",
            delete_failed: "Error al eliminar el informe",
        },
    };
}

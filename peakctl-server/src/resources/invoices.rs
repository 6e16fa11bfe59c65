//! Invoices - `/api/facturacion`

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Invoices;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(deserialize_with = "nullable")]
    pub id_factura: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_venta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_factura: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub metodo_pago: Option<Scalar>,
    /// Optional on create
    #[serde(deserialize_with = "nullable")]
    pub descuentos: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub impuestos: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub tipos_factura: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InvoiceChanges {
    pub id_venta: Patch,
    pub fecha_factura: Patch,
    pub metodo_pago: Patch,
    pub descuentos: Patch,
    pub impuestos: Patch,
    pub tipos_factura: Patch,
}

impl Record for Invoice {
    const COLUMNS: &'static [&'static str] = &[
        "id_factura",
        "id_venta",
        "fecha_factura",
        "metodo_pago",
        "descuentos",
        "impuestos",
        "tipos_factura",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_factura", self.id_factura),
            ("id_venta", self.id_venta),
            ("fecha_factura", self.fecha_factura),
            ("metodo_pago", self.metodo_pago),
            ("descuentos", self.descuentos),
            ("impuestos", self.impuestos),
            ("tipos_factura", self.tipos_factura),
        ]
    }
}

impl Changeset for InvoiceChanges {
    const COLUMNS: &'static [&'static str] = &[
        "id_venta",
        "fecha_factura",
        "metodo_pago",
        "descuentos",
        "impuestos",
        "tipos_factura",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_venta", self.id_venta),
            ("fecha_factura", self.fecha_factura),
            ("metodo_pago", self.metodo_pago),
            ("descuentos", self.descuentos),
            ("impuestos", self.impuestos),
            ("tipos_factura", self.tipos_factura),
        ]
    }
}

impl Resource for Invoices {
    type Record = Invoice;
    type Changes = InvoiceChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "facturacion",
        table: "facturacion",
        identity: "id_factura",
        required: &[
            "id_factura",
            "id_venta",
            "fecha_factura",
            "metodo_pago",
            "impuestos",
            "tipos_factura",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener la factura",
            not_found: "Factura no encontrada",
            get_failed: "Error al obtener la facturacion",
            invalid: "Metodo de pago y tipo de facturacion son requeridos",
            create_failed: "Error al crear la factura",
            update_not_found: "Factura no encontrada ",
            updated: "Factura actualizada correctamente",
            update_failed: "Error al actualizar la factura",
            delete_not_found: "Factura no encontrada",
            deleted: "Factura eliminada corectamente",
            delete_failed: "Error al eliminar la factura",
        },
    };
}

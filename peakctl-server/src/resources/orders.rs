//! Orders - `/api/pedidos`
//!
//! `resumen_pedido` is optional on create. The sale an order is billed to
//! (`id_venta`) cannot be changed by update.

use serde::{Deserialize, Serialize};

use super::{Changeset, Descriptor, Messages, Record, Resource};
use crate::models::{nullable, Patch, Scalar};

pub struct Orders;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "nullable")]
    pub id_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_usuario: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_producto: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub id_venta: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub fecha_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub estado_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub cantidad: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub tiempo_entrega_estimado: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub detalles_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub resumen_pedido: Option<Scalar>,
    #[serde(deserialize_with = "nullable")]
    pub total_pagar: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderChanges {
    pub id_usuario: Patch,
    pub id_producto: Patch,
    pub fecha_pedido: Patch,
    pub estado_pedido: Patch,
    pub cantidad: Patch,
    pub tiempo_entrega_estimado: Patch,
    pub detalles_pedido: Patch,
    pub resumen_pedido: Patch,
    pub total_pagar: Patch,
}

impl Record for Order {
    const COLUMNS: &'static [&'static str] = &[
        "id_pedido",
        "id_usuario",
        "id_producto",
        "id_venta",
        "fecha_pedido",
        "estado_pedido",
        "cantidad",
        "tiempo_entrega_estimado",
        "detalles_pedido",
        "resumen_pedido",
        "total_pagar",
    ];

    fn into_fields(self) -> Vec<(&'static str, Option<Scalar>)> {
        vec![
            ("id_pedido", self.id_pedido),
            ("id_usuario", self.id_usuario),
            ("id_producto", self.id_producto),
            ("id_venta", self.id_venta),
            ("fecha_pedido", self.fecha_pedido),
            ("estado_pedido", self.estado_pedido),
            ("cantidad", self.cantidad),
            ("tiempo_entrega_estimado", self.tiempo_entrega_estimado),
            ("detalles_pedido", self.detalles_pedido),
            ("resumen_pedido", self.resumen_pedido),
            ("total_pagar", self.total_pagar),
        ]
    }
}

impl Changeset for OrderChanges {
    const COLUMNS: &'static [&'static str] = &[
        "id_usuario",
        "id_producto",
        "fecha_pedido",
        "estado_pedido",
        "cantidad",
        "tiempo_entrega_estimado",
        "detalles_pedido",
        "resumen_pedido",
        "total_pagar",
    ];

    fn into_patches(self) -> Vec<(&'static str, Patch)> {
        vec![
            ("id_usuario", self.id_usuario),
            ("id_producto", self.id_producto),
            ("fecha_pedido", self.fecha_pedido),
            ("estado_pedido", self.estado_pedido),
            ("cantidad", self.cantidad),
            ("tiempo_entrega_estimado", self.tiempo_entrega_estimado),
            ("detalles_pedido", self.detalles_pedido),
            ("resumen_pedido", self.resumen_pedido),
            ("total_pagar", self.total_pagar),
        ]
    }
}

impl Resource for Orders {
    type Record = Order;
    type Changes = OrderChanges;

    const DESCRIPTOR: Descriptor = Descriptor {
        path: "pedidos",
        table: "pedidos",
        identity: "id_pedido",
        required: &[
            "id_pedido",
            "id_usuario",
            "id_producto",
            "id_venta",
            "fecha_pedido",
            "estado_pedido",
            "cantidad",
            "tiempo_entrega_estimado",
            "detalles_pedido",
            "total_pagar",
        ],
        credential: None,
        messages: Messages {
            list_failed: "al obtener los datos de los pedidos",
            not_found: "Pedido no encontrado",
            get_failed: "Error al obtener el pedido",
            invalid: "Datos requeridos",
            create_failed: "Error al crear el pedido",
            update_not_found: "Pedido no encontrada ",
            updated: "Pedido actualizada correctamente",
            update_failed: "Error al actualizar el pedido",
            delete_not_found: "Pedido no encontrado",
            deleted: "Pedido eliminado corectamente",
            delete_failed: "Error al eliminar un pedido",
        },
    };
}

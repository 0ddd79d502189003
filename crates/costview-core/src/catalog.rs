// ABOUTME: The product route tables shipped with costview, one per build variant.
// ABOUTME: Path, template, and controller bindings are fixed for compatibility with the backend.

use crate::route::{RouteTable, RouteTableBuilder};

fn base() -> RouteTableBuilder {
    RouteTable::builder()
        .when("/components/", "partials/components.html", "componentsCtrl")
        .when(
            "/allocation/client/",
            "partials/allocationclient.html",
            "allocationClientCtrl",
        )
}

/// The client build: component and client-allocation views only.
pub fn standard() -> RouteTable {
    base()
        .otherwise("/components/")
        .unwrap_or_else(|_| unreachable!("/components/ is registered above"))
}

/// The admin build: the full view set, including admin allocation, cost
/// cards, and per-device costs.
pub fn full() -> RouteTable {
    base()
        .when(
            "/allocation/admin/",
            "partials/allocationadmin.html",
            "allocationAdminCtrl",
        )
        .when("/costcard/", "partials/costcard.html", "costCardCtrl")
        .when(
            "/costs-per-device/",
            "partials/costs_per_device.html",
            "costPerDeviceCtrl",
        )
        .otherwise("/components/")
        .unwrap_or_else(|_| unreachable!("/components/ is registered above"))
}

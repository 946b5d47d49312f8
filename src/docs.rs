use crate::api::invoices::InvoiceForm;
use crate::api::workers::RegisterForm;
use crate::model::attendance::Attendance;
use crate::model::invoice::Invoice;
use crate::model::worker::Worker;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Time Clock API",
        version = "1.0.0",
        description = r#"
## Badge-Scan Time Clock & Invoicing

Tracks worker attendance via badge-scan check-in/check-out events and
computes hourly-rate invoices over a date range.

### 🔹 Key Features
- **Attendance Tracking**
  - One scan checks a worker in, the next one checks them out
- **Worker Registration**
  - Register badge uids through a browser form
- **Invoicing**
  - Overlap-based billable-hours calculation over a billing window

### 📦 Response Format
- JSON for the badge reader endpoints
- HTML forms and result pages for the browser endpoints

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::timestamps::record_scan,
        crate::api::workers::register_worker,
        crate::api::workers::check_uid,
        crate::api::invoices::generate_invoice,
    ),
    components(
        schemas(
            Worker,
            Attendance,
            Invoice,
            RegisterForm,
            InvoiceForm
        )
    ),
    tags(
        (name = "Attendance", description = "Badge-scan attendance APIs"),
        (name = "Workers", description = "Worker registration and lookup APIs"),
        (name = "Invoices", description = "Invoice generation APIs"),
    )
)]
pub struct ApiDoc;

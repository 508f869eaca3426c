use crate::{Artifact, emit::AuditWriter};
use auditgen_schema::{AUDIT_INTERFACE, prelude::*};
use auditgen_utils::case::{to_compact_form, to_delimited_form};

/// Render the `AuditInterface` contract that every audit type implements.
#[must_use]
pub fn emit_interface(package: &str) -> Artifact {
    let date = AuditTypeDescriptor::audit_date_field();
    let delimited = to_delimited_form(&date.raw_name);
    let ty = date.value_type;

    let mut w = AuditWriter::default();
    w.package(package);
    w.line(0, format!("import {};", ty.qualified_name()));
    w.blank();
    w.line(0, format!("public interface {AUDIT_INTERFACE}"));
    w.line(0, "{");
    w.line(
        1,
        format!("public {ty} {}();", to_compact_form(&format!("get_{delimited}"))),
    );
    w.blank();
    w.line(
        1,
        format!(
            "public void {}({ty} {delimited});",
            to_compact_form(&format!("set_{delimited}"))
        ),
    );
    w.line(0, "}");

    Artifact::new(format!("{package}.{AUDIT_INTERFACE}"), w.finish())
}

use crate::Artifact;
use auditgen_schema::prelude::*;
use auditgen_utils::case::{DELIMITER, to_compact_form, to_delimited_form};

/// Imports every audit type needs, independent of its fields.
pub const IMPORTS: [&str; 10] = [
    "java.util.Date",
    "javax.persistence.Basic",
    "javax.persistence.Column",
    "javax.persistence.Entity",
    "javax.persistence.GeneratedValue",
    "javax.persistence.Id",
    "javax.persistence.Table",
    "javax.persistence.Temporal",
    "javax.persistence.TemporalType",
    "javax.xml.bind.annotation.XmlRootElement",
];

// emit
/// Render the audit type described by `desc`.
///
/// Pure and deterministic: identical descriptors give byte-identical output.
#[must_use]
pub fn emit(desc: &AuditTypeDescriptor) -> Artifact {
    let mut w = AuditWriter::default();

    w.package(&desc.package_name);
    w.imports();
    w.header(desc);
    w.general_audit_fields(desc);
    for field in &desc.fields {
        w.accessors(field);
    }
    w.line(0, "}");

    Artifact::new(desc.qualified_name(), w.finish())
}

///
/// AuditWriter
/// Line-oriented builder; `accessors` is the only place field text is formed.
///

#[derive(Default)]
pub(crate) struct AuditWriter {
    out: String,
}

impl AuditWriter {
    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn line(&mut self, indent: usize, text: impl AsRef<str>) {
        for _ in 0..indent {
            self.out.push('\t');
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn package(&mut self, package: &str) {
        self.line(0, format!("package {package};"));
        self.blank();
    }

    fn imports(&mut self) {
        for import in IMPORTS {
            self.line(0, format!("import {import};"));
        }
        self.blank();
    }

    fn header(&mut self, desc: &AuditTypeDescriptor) {
        let name = &desc.generated_name;

        self.line(0, "@Entity");
        self.line(0, format!("@Table(name = \"{name}\")"));
        self.line(0, format!("@XmlRootElement(name = \"{name}\")"));
        self.line(
            0,
            format!(
                "public class {name} extends {} implements {}",
                desc.original_name,
                desc.interface_name()
            ),
        );
        self.line(0, "{");
    }

    // general_audit_fields
    // backing fields, identity markers, then the id and date accessors
    fn general_audit_fields(&mut self, desc: &AuditTypeDescriptor) {
        let id = desc.audit_id_field();
        let date = AuditTypeDescriptor::audit_date_field();

        for field in [&id, &date] {
            self.line(
                1,
                format!(
                    "private {} {};",
                    field.value_type,
                    backing_field(&to_delimited_form(&field.raw_name))
                ),
            );
        }
        self.blank();

        self.line(1, "@Id");
        self.line(1, "@GeneratedValue");
        self.accessors(&id);
        self.accessors(&date);
    }

    // accessors
    // column markers + getter + setter for one field
    pub(crate) fn accessors(&mut self, field: &FieldDescriptor) {
        let delimited = to_delimited_form(&field.raw_name);
        let ty = field.value_type;
        let backing = backing_field(&delimited);

        self.line(
            1,
            format!("@Column(name = \"{}\")", to_compact_form(&delimited)),
        );
        if ty.is_temporal() {
            self.line(1, "@Temporal(TemporalType.TIMESTAMP)");
        }
        if !field.optional {
            self.line(1, "@Basic(optional = false)");
        }

        self.line(1, format!("public {ty} {}()", accessor_name("get", &delimited)));
        self.line(1, "{");
        self.line(2, format!("return {backing};"));
        self.line(1, "}");
        self.blank();

        self.line(
            1,
            format!(
                "public void {}({ty} {delimited})",
                accessor_name("set", &delimited)
            ),
        );
        self.line(1, "{");
        self.line(2, format!("{backing} = {delimited};"));
        self.line(1, "}");
        self.blank();
    }
}

/// `_<delimited>`; consumers of audit types rely on this naming.
fn backing_field(delimited: &str) -> String {
    format!("{DELIMITER}{delimited}")
}

/// `get` + `car_make` → `getCarMake`.
fn accessor_name(verb: &str, delimited: &str) -> String {
    to_compact_form(&format!("{verb}{DELIMITER}{delimited}"))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use auditgen_schema::AuditNaming;

    fn car() -> AuditTypeDescriptor {
        AuditTypeDescriptor::new(
            &AuditNaming::default(),
            "Car",
            vec![
                FieldDescriptor::mirrored("CarMake", ValueType::String),
                FieldDescriptor::mirrored("CarModel", ValueType::String),
            ],
        )
    }

    fn render(field: &FieldDescriptor) -> String {
        let mut w = AuditWriter::default();
        w.accessors(field);
        w.finish()
    }

    #[test]
    fn optional_string_accessors() {
        let text = render(&FieldDescriptor::mirrored("CarMake", ValueType::String));

        assert_eq!(
            text,
            "\t@Column(name = \"carMake\")\n\
             \tpublic String getCarMake()\n\
             \t{\n\
             \t\treturn _car_make;\n\
             \t}\n\
             \n\
             \tpublic void setCarMake(String car_make)\n\
             \t{\n\
             \t\t_car_make = car_make;\n\
             \t}\n\
             \n"
        );
    }

    #[test]
    fn required_date_gets_temporal_and_basic_markers() {
        let text = render(&AuditTypeDescriptor::audit_date_field());

        assert!(text.starts_with(
            "\t@Column(name = \"auditDate\")\n\
             \t@Temporal(TemporalType.TIMESTAMP)\n\
             \t@Basic(optional = false)\n\
             \tpublic Date getAuditDate()\n"
        ));
        assert!(text.contains("\tpublic void setAuditDate(Date audit_date)\n"));
    }

    #[test]
    fn optional_date_has_no_basic_marker() {
        let text = render(&FieldDescriptor::mirrored("Created", ValueType::Date));

        assert!(text.contains("@Temporal(TemporalType.TIMESTAMP)"));
        assert!(!text.contains("@Basic"));
    }

    #[test]
    fn already_delimited_raw_names_keep_their_words() {
        let text = render(&FieldDescriptor::mirrored("Serial_Number", ValueType::Long));

        assert!(text.contains("@Column(name = \"serialNumber\")"));
        assert!(text.contains("public Long getSerialNumber()"));
        assert!(text.contains("_serial_number = serial_number;"));
    }

    #[test]
    fn header_and_package() {
        let text = emit(&car()).into_contents();

        assert!(text.starts_with("package com.lsq.systems.metagen58;\n\nimport java.util.Date;\n"));
        assert!(text.contains(
            "import javax.xml.bind.annotation.XmlRootElement;\n\n\
             @Entity\n\
             @Table(name = \"CarAudit\")\n\
             @XmlRootElement(name = \"CarAudit\")\n\
             public class CarAudit extends Car implements AuditInterface\n\
             {\n"
        ));
        assert!(text.ends_with("\t}\n\n}\n"));
    }

    #[test]
    fn general_audit_block_precedes_mirrored_fields() {
        let text = emit(&car()).into_contents();

        assert!(text.contains(
            "{\n\
             \tprivate Integer _car_audit_id;\n\
             \tprivate Date _audit_date;\n\
             \n\
             \t@Id\n\
             \t@GeneratedValue\n\
             \t@Column(name = \"carAuditId\")\n\
             \tpublic Integer getCarAuditId()\n"
        ));

        let id = text.find("getCarAuditId").unwrap();
        let date = text.find("getAuditDate").unwrap();
        let make = text.find("getCarMake").unwrap();
        let model = text.find("getCarModel").unwrap();
        assert!(id < date && date < make && make < model);
    }

    #[test]
    fn imports_are_static() {
        let empty = AuditTypeDescriptor::new(&AuditNaming::default(), "Tag", Vec::new());
        let text = emit(&empty).into_contents();

        for import in IMPORTS {
            assert!(text.contains(&format!("import {import};\n")), "{import}");
        }
        assert_eq!(text.matches("import ").count(), IMPORTS.len());
    }

    #[test]
    fn emission_is_deterministic() {
        let first = emit(&car());
        let second = emit(&car());

        assert_eq!(first.contents(), second.contents());
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_eq!(first.qualified_name(), "com.lsq.systems.metagen58.CarAudit");
    }

    #[test]
    fn braces_balance() {
        let text = emit(&car()).into_contents();

        assert_eq!(text.matches('{').count(), text.matches('}').count());
    }
}

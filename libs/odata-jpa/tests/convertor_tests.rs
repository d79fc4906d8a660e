#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end conversion over a small entity hierarchy.

use odata_edm::EdmSimpleTypeKind;
use odata_jpa::{
    Attribute, FieldProbe, JpaTypeConvertor, LookupError, ManagedType, Metamodel, ModelError,
    SourceType, TemporalKind, TypeIntrospector, TypeTag,
};

fn shop_metamodel() -> Metamodel {
    Metamodel::builder()
        .managed_type(
            ManagedType::new("com.acme.BaseEntity")
                .with_superclass("java.lang.Object")
                .with_attribute("id", "java.util.UUID")
                .with_temporal_attribute("createdAt", TypeTag::Calendar, TemporalKind::Timestamp)
                .with_temporal_attribute("dailyCutoff", TypeTag::Date, TemporalKind::Time),
        )
        .managed_type(
            ManagedType::new("com.acme.Store")
                .with_superclass("com.acme.BaseEntity")
                .with_attribute("name", "java.lang.String")
                .with_attribute("logo", "byte[]")
                .with_attribute("rating", "java.lang.Byte")
                .with_attribute("openedOn", "java.util.Date")
                .with_temporal_attribute("opensAt", "java.util.Date", TemporalKind::Time)
                .with_attribute("location", "com.acme.Geo"),
        )
        .build()
        .unwrap()
}

#[test]
fn store_attributes_map_to_documented_kinds() {
    let model = shop_metamodel();
    let convertor = JpaTypeConvertor::new(&model);

    let expect = [
        ("name", EdmSimpleTypeKind::String),
        ("logo", EdmSimpleTypeKind::Binary),
        ("rating", EdmSimpleTypeKind::Byte),
        ("openedOn", EdmSimpleTypeKind::DateTime),
        ("opensAt", EdmSimpleTypeKind::Time),
    ];
    for (field, kind) in expect {
        let attribute = model.attribute("com.acme.Store", field).unwrap();
        assert_eq!(convertor.convert_attribute(attribute).unwrap(), kind, "{field}");
    }
}

#[test]
fn embedded_type_is_not_supported() {
    let model = shop_metamodel();
    let convertor = JpaTypeConvertor::new(&model);
    let location = model.attribute("com.acme.Store", "location").unwrap();

    let err = convertor.convert_attribute(location).unwrap_err();
    assert_eq!(
        err,
        ModelError::TypeNotSupported {
            type_name: "com.acme.Geo".to_owned()
        }
    );
}

#[test]
fn inherited_time_annotation_is_honored() {
    let model = shop_metamodel();
    let convertor = JpaTypeConvertor::new(&model);

    // Field declared on the superclass, looked up from the subclass.
    let cutoff = Attribute::new("com.acme.Store", "dailyCutoff", TypeTag::Date);
    assert_eq!(
        convertor.convert_attribute(&cutoff).unwrap(),
        EdmSimpleTypeKind::Time
    );

    let created = Attribute::new("com.acme.Store", "createdAt", TypeTag::Calendar);
    assert_eq!(
        convertor.convert_attribute(&created).unwrap(),
        EdmSimpleTypeKind::DateTime
    );
}

#[test]
fn explicit_source_type_overrides_attribute_type() {
    let model = shop_metamodel();
    let convertor = JpaTypeConvertor::new(&model);
    let opens_at = model.attribute("com.acme.Store", "opensAt").unwrap();

    let kind = convertor
        .convert_to_edm_simple_type(&SourceType::from(TypeTag::Calendar), Some(opens_at))
        .unwrap();
    assert_eq!(kind, EdmSimpleTypeKind::Time);

    let kind = convertor
        .convert_to_edm_simple_type(&SourceType::named("java.util.Calendar"), None)
        .unwrap();
    assert_eq!(kind, EdmSimpleTypeKind::DateTime);
}

struct RestrictedMetamodel;

impl TypeIntrospector for RestrictedMetamodel {
    fn probe_field(&self, type_name: &str, _field: &str) -> Result<FieldProbe, LookupError> {
        if type_name == "com.acme.Sealed" {
            return Err(LookupError::AccessDenied {
                type_name: type_name.to_owned(),
                reason: "field access restricted".to_owned(),
            });
        }
        Ok(FieldProbe::NotFound)
    }

    fn superclass_of(&self, _type_name: &str) -> Result<Option<String>, LookupError> {
        Ok(Some("com.acme.Sealed".to_owned()))
    }
}

#[test]
fn lookup_failure_is_propagated_with_context() {
    let convertor = JpaTypeConvertor::new(&RestrictedMetamodel);
    let attribute = Attribute::new("com.acme.Open", "closesAt", TypeTag::Date);

    let err = convertor.convert_attribute(&attribute).unwrap_err();
    assert_eq!(
        err,
        ModelError::Lookup {
            type_name: "com.acme.Open".to_owned(),
            field: "closesAt".to_owned(),
            source: LookupError::AccessDenied {
                type_name: "com.acme.Sealed".to_owned(),
                reason: "field access restricted".to_owned(),
            },
        }
    );
    assert!(err.to_string().contains("com.acme.Open.closesAt"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn convertor_is_shareable_across_threads() {
    let model = shop_metamodel();
    let convertor = JpaTypeConvertor::new(&model);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let attribute = model.attribute("com.acme.Store", "opensAt").unwrap();
                assert_eq!(
                    convertor.convert_attribute(attribute).unwrap(),
                    EdmSimpleTypeKind::Time
                );
            });
        }
    });
}

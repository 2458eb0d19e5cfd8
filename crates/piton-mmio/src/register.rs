//! Register descriptions.

use serde::Serialize;

use crate::field::FieldInfo;

/// A memory-mapped 32-bit register.
///
/// Implemented on empty marker types; the associated constants carry the
/// hardware description and the field list used for register-map output.
pub trait Register {
    /// Datasheet name.
    const NAME: &'static str;

    /// Physical address.
    const ADDR: usize;

    /// One-line hardware description.
    const DOC: &'static str;

    /// Described fields, lowest bit first.
    const FIELDS: &'static [FieldInfo];
}

/// Serializable description of a register, for map dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterDoc {
    pub name: &'static str,
    pub addr: usize,
    pub doc: &'static str,
    pub fields: Vec<FieldInfo>,
}

/// Describe register `R`.
pub fn describe<R: Register>() -> RegisterDoc {
    RegisterDoc {
        name: R::NAME,
        addr: R::ADDR,
        doc: R::DOC,
        fields: R::FIELDS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Access, Field};

    enum Status {}

    impl Status {
        const READY: Field<Self> = Field::bit("ready", 0, Access::ReadOnly, "Device ready");
        const ERROR: Field<Self> = Field::bit("error", 1, Access::ReadOnly, "Device fault");
    }

    impl Register for Status {
        const NAME: &'static str = "STATUS";
        const ADDR: usize = 0x2000;
        const DOC: &'static str = "Device status";
        const FIELDS: &'static [FieldInfo] = &[Status::READY.info(), Status::ERROR.info()];
    }

    #[test]
    fn test_describe() {
        let doc = describe::<Status>();
        assert_eq!(doc.name, "STATUS");
        assert_eq!(doc.addr, 0x2000);
        assert_eq!(doc.fields.len(), 2);
        assert_eq!(doc.fields[0].name, "ready");
        assert_eq!(doc.fields[1].pos, 1);
    }
}

//! Builtin types and the queries IR construction makes against them.

use std::fmt;
use std::rc::Rc;

/// Shared handle to a registered type. Types are owned by the registry,
/// never by the nodes that refer to them.
pub type TypeRef = Rc<Type>;

/// Numeric classification of a scalar type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Float,
    Signed,
    Unsigned,
    Boolean,
}

#[derive(Clone, Debug)]
pub enum TypeKind {
    Scalar(NumberKind),
    /// Provisional type of an untyped numeric constant.
    Literal { scalar: TypeRef },
    Vector { component: TypeRef, columns: u8 },
}

#[derive(Clone, Debug)]
pub struct Type {
    name: String,
    kind: TypeKind,
}

impl Type {
    fn scalar(name: &str, number_kind: NumberKind) -> TypeRef {
        Rc::new(Type {
            name: name.to_string(),
            kind: TypeKind::Scalar(number_kind),
        })
    }

    fn literal(name: &str, scalar: &TypeRef) -> TypeRef {
        Rc::new(Type {
            name: name.to_string(),
            kind: TypeKind::Literal {
                scalar: scalar.clone(),
            },
        })
    }

    fn vector(component: &TypeRef, columns: u8) -> TypeRef {
        Rc::new(Type {
            name: format!("{}{}", component.name, columns),
            kind: TypeKind::Vector {
                component: component.clone(),
                columns,
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Name shown to users. Untyped literal types present as their concrete scalar.
    pub fn display_name(&self) -> &str {
        match &self.kind {
            TypeKind::Literal { scalar } => scalar.display_name(),
            _ => &self.name,
        }
    }

    /// Element type of a vector; every other type is its own component.
    pub fn component_type(&self) -> &Type {
        match &self.kind {
            TypeKind::Vector { component, .. } => component,
            _ => self,
        }
    }

    pub fn columns(&self) -> u8 {
        match &self.kind {
            TypeKind::Vector { columns, .. } => *columns,
            _ => 1,
        }
    }

    fn number_kind(&self) -> Option<NumberKind> {
        match &self.kind {
            TypeKind::Scalar(kind) => Some(*kind),
            TypeKind::Literal { scalar } => scalar.number_kind(),
            TypeKind::Vector { .. } => None,
        }
    }

    pub fn is_float(&self) -> bool {
        self.number_kind() == Some(NumberKind::Float)
    }

    /// Signed or unsigned integer scalar.
    pub fn is_integer(&self) -> bool {
        matches!(
            self.number_kind(),
            Some(NumberKind::Signed | NumberKind::Unsigned)
        )
    }

    /// Float or integer scalar. Vectors are not numbers; ask their component.
    pub fn is_number(&self) -> bool {
        self.is_float() || self.is_integer()
    }

    pub fn is_boolean(&self) -> bool {
        self.number_kind() == Some(NumberKind::Boolean)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TypeKind::Literal { .. })
    }

    /// The concrete scalar an untyped literal type commits to.
    ///
    /// Only meaningful for literal types; callers check [`Type::is_literal`] first.
    pub fn scalar_type_for_literal(&self) -> Option<&TypeRef> {
        match &self.kind {
            TypeKind::Literal { scalar } => Some(scalar),
            _ => None,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Type {}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Every builtin type, created once per compilation.
#[derive(Debug)]
pub struct TypeRegistry {
    pub float: TypeRef,
    pub half: TypeRef,
    pub int: TypeRef,
    pub uint: TypeRef,
    pub short: TypeRef,
    pub bool: TypeRef,
    pub float_literal: TypeRef,
    pub int_literal: TypeRef,
    pub float2: TypeRef,
    pub float3: TypeRef,
    pub float4: TypeRef,
    pub half2: TypeRef,
    pub half3: TypeRef,
    pub half4: TypeRef,
    pub int2: TypeRef,
    pub int3: TypeRef,
    pub int4: TypeRef,
    pub bool2: TypeRef,
    pub bool3: TypeRef,
    pub bool4: TypeRef,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let float = Type::scalar("float", NumberKind::Float);
        let half = Type::scalar("half", NumberKind::Float);
        let int = Type::scalar("int", NumberKind::Signed);
        let uint = Type::scalar("uint", NumberKind::Unsigned);
        let short = Type::scalar("short", NumberKind::Signed);
        let bool = Type::scalar("bool", NumberKind::Boolean);
        let float_literal = Type::literal("$floatLiteral", &float);
        let int_literal = Type::literal("$intLiteral", &int);

        Self {
            float2: Type::vector(&float, 2),
            float3: Type::vector(&float, 3),
            float4: Type::vector(&float, 4),
            half2: Type::vector(&half, 2),
            half3: Type::vector(&half, 3),
            half4: Type::vector(&half, 4),
            int2: Type::vector(&int, 2),
            int3: Type::vector(&int, 3),
            int4: Type::vector(&int, 4),
            bool2: Type::vector(&bool, 2),
            bool3: Type::vector(&bool, 3),
            bool4: Type::vector(&bool, 4),
            float,
            half,
            int,
            uint,
            short,
            bool,
            float_literal,
            int_literal,
        }
    }

    fn all(&self) -> [&TypeRef; 20] {
        [
            &self.float,
            &self.half,
            &self.int,
            &self.uint,
            &self.short,
            &self.bool,
            &self.float_literal,
            &self.int_literal,
            &self.float2,
            &self.float3,
            &self.float4,
            &self.half2,
            &self.half3,
            &self.half4,
            &self.int2,
            &self.int3,
            &self.int4,
            &self.bool2,
            &self.bool3,
            &self.bool4,
        ]
    }

    /// Look a builtin up by its internal name (`float3`, `$intLiteral`, ...).
    pub fn lookup(&self, name: &str) -> Option<TypeRef> {
        self.all()
            .into_iter()
            .find(|ty| ty.name() == name)
            .cloned()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

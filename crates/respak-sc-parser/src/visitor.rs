use syn::ext::IdentExt as _;
use syn::visit::Visit;
use syn::{Expr, ItemConst, Type};

/// A `const` item as written in the source.
#[derive(Clone, Debug)]
pub struct ConstDecl {
    /// Name with any `r#` prefix removed.
    pub name: String,
    pub ty: Type,
    pub expr: Expr,
}

/// Collects every `const` item of a file, including those in inline modules.
///
/// Associated constants and constants inside function bodies are not items of
/// the file and are ignored.
#[derive(Default)]
pub struct ConstVisitor {
    consts: Vec<ConstDecl>,
}

impl ConstVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_consts(self) -> Vec<ConstDecl> {
        self.consts
    }
}

impl<'ast> Visit<'ast> for ConstVisitor {
    fn visit_item_const(&mut self, item: &'ast ItemConst) {
        self.consts.push(ConstDecl {
            name: item.ident.unraw().to_string(),
            ty: (*item.ty).clone(),
            expr: (*item.expr).clone(),
        });
    }

    fn visit_item_fn(&mut self, _item: &'ast syn::ItemFn) {}

    fn visit_item_impl(&mut self, _item: &'ast syn::ItemImpl) {}

    fn visit_item_trait(&mut self, _item: &'ast syn::ItemTrait) {}
}

//! 服务标记宏实现

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, Error, Expr, Item, ItemStruct, Meta,
    Result, Token, Visibility,
};

use crate::utils::registration_fn_ident;

/// 服务标记参数
#[derive(Debug, Clone, Default)]
pub struct ServiceArgs {
    /// 显式声明的生命周期
    pub lifetime: Option<ServiceLifetime>,
    /// 显式声明的服务类型
    pub provides: Option<syn::Path>,
}

/// 服务生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLifetime {
    Singleton,
    Scoped,
    Transient,
}

impl ServiceArgs {
    /// 生效的生命周期, 未声明时为 Scoped
    pub fn effective_lifetime(&self) -> ServiceLifetime {
        self.lifetime.unwrap_or(ServiceLifetime::Scoped)
    }
}

impl Parse for ServiceArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ServiceArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::Path(path) => {
                    let lifetime = if path.is_ident("singleton") {
                        ServiceLifetime::Singleton
                    } else if path.is_ident("scoped") {
                        ServiceLifetime::Scoped
                    } else if path.is_ident("transient") {
                        ServiceLifetime::Transient
                    } else {
                        return Err(Error::new_spanned(
                            &path,
                            "未知的 service 参数，支持 singleton、scoped、transient 和 provides = Trait",
                        ));
                    };

                    if args.lifetime.is_some() {
                        return Err(Error::new_spanned(&path, "生命周期只能声明一次"));
                    }
                    args.lifetime = Some(lifetime);
                }
                Meta::NameValue(nv) => {
                    if !nv.path.is_ident("provides") {
                        return Err(Error::new_spanned(
                            &nv.path,
                            "未知的 service 参数，支持 singleton、scoped、transient 和 provides = Trait",
                        ));
                    }

                    match nv.value {
                        Expr::Path(expr_path) => {
                            if args.provides.is_some() {
                                return Err(Error::new_spanned(
                                    &expr_path,
                                    "provides 只能声明一次",
                                ));
                            }
                            args.provides = Some(expr_path.path);
                        }
                        other => {
                            return Err(Error::new_spanned(
                                &other,
                                "provides 的值必须是 trait 路径，例如 provides = Mailer",
                            ));
                        }
                    }
                }
                other => {
                    return Err(Error::new_spanned(&other, "无法解析的 service 参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[service] 宏
pub fn service_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let service_args = if args.is_empty() {
        ServiceArgs::default()
    } else {
        match syn::parse2::<ServiceArgs>(args) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error(),
        }
    };

    let input_struct = match syn::parse2::<Item>(input) {
        Ok(Item::Struct(input_struct)) => input_struct,
        Ok(other) => {
            return Error::new_spanned(&other, "#[service] 只能标记结构体").to_compile_error();
        }
        Err(e) => return e.to_compile_error(),
    };

    if let Err(e) = validate_struct(&input_struct) {
        return e.to_compile_error();
    }

    // 生成启动时的描述符提交代码
    let registration_code = generate_registration_code(&input_struct, &service_args);

    quote! {
        #input_struct

        #registration_code
    }
}

/// 校验被标记的结构体
///
/// 泛型结构体没有唯一的 `TypeId`, 重复标记会在嵌套展开时提交两条描述符,
/// 两者都在展开前拒绝。
fn validate_struct(input_struct: &ItemStruct) -> Result<()> {
    if !input_struct.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input_struct.generics,
            "#[service] 不支持泛型结构体",
        ));
    }

    for attr in &input_struct.attrs {
        if attr.path().is_ident("service") {
            return Err(Error::new_spanned(
                attr,
                "同一结构体只能有一个 #[service] 标记",
            ));
        }
    }

    Ok(())
}

/// 生成服务自动提交代码
fn generate_registration_code(
    input_struct: &ItemStruct,
    args: &ServiceArgs,
) -> proc_macro2::TokenStream {
    let struct_name = &input_struct.ident;
    let registration_fn_name = registration_fn_ident(&struct_name.to_string());
    let public = matches!(input_struct.vis, Visibility::Public(_));

    let lifetime_variant = match args.effective_lifetime() {
        ServiceLifetime::Singleton => quote! { injection_common::Lifetime::Singleton },
        ServiceLifetime::Scoped => quote! { injection_common::Lifetime::Scoped },
        ServiceLifetime::Transient => quote! { injection_common::Lifetime::Transient },
    };

    let (service_key, factory) = match &args.provides {
        Some(trait_path) => (
            quote! { Some(injection_common::TypeKey::of::<dyn #trait_path>()) },
            // 以 trait 对象包裹实例, 解析端按服务类型向下转型
            quote! {
                injection_common::ServiceFactory::from_fn(|| {
                    let service: ::std::sync::Arc<dyn #trait_path> =
                        ::std::sync::Arc::new(<#struct_name as ::core::default::Default>::default());
                    ::std::sync::Arc::new(service)
                })
            },
        ),
        None => (
            quote! { None },
            quote! { injection_common::ServiceFactory::of::<#struct_name>() },
        ),
    };

    quote! {
        // 使用 ctor 在程序启动时提交服务描述符
        #[ctor::ctor]
        fn #registration_fn_name() {
            injection_common::submit_service(injection_common::ServiceDescriptor {
                implementation: injection_common::TypeKey::of::<#struct_name>(),
                service: #service_key,
                lifetime: #lifetime_variant,
                module_path: module_path!(),
                public: #public,
                factory: #factory,
            });
        }
    }
}

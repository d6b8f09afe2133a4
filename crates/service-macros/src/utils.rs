//! 宏工具函数

use proc_macro2::Span;
use syn::Ident;

/// 生成描述符提交函数的标识符
///
/// 同一模块内按结构体名区分, 嵌套模块之间互不冲突。
pub fn registration_fn_ident(struct_name: &str) -> Ident {
    let fn_name = format!("__register_service_{}", to_snake_case(struct_name));
    Ident::new(&fn_name, Span::call_site())
}

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            // 检查前一个字符是否为小写，或者下一个字符是否为小写
            let prev_is_lower = chars.get(i - 1).map_or(false, |c| c.is_lowercase());
            let next_is_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());

            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.push(ch.to_lowercase().next().unwrap_or(ch));
    }

    result
}

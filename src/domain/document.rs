//! Firestore REST 响应模型
//!
//! 字段值在 REST 接口中带有类型标签，例如 `{"stringValue": "Widget"}`。
//! 这里每个标签对应一个可选字段，未知标签直接忽略。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 字段缺失或类型不符时的占位文本
pub const PLACEHOLDER: &str = "N/A";

/// `doubleValue` 的取值
///
/// 非有限值（`"NaN"`、`"Infinity"`、`"-Infinity"`）以字符串形式传输。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Double {
    Number(f64),
    Text(String),
}

impl Double {
    /// 数值形式，字符串形式返回 `None`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Double::Number(value) => Some(*value),
            Double::Text(_) => None,
        }
    }
}

/// 带类型标签的字段值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Value {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_value: Option<Double>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<bool>,
    /// Firestore 以字符串形式传输 64 位整数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_value: Option<String>,
}

impl Value {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            string_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            double_value: Some(Double::Number(value)),
            ..Default::default()
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            boolean_value: Some(value),
            ..Default::default()
        }
    }
}

/// 集合中的一条记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// 完整资源路径
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Document {
    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.string_value.as_deref()
    }

    pub fn double_field(&self, key: &str) -> Option<f64> {
        self.fields.get(key)?.double_value.as_ref()?.as_f64()
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.fields.get(key)?.boolean_value
    }

    /// 资源路径的最后一段，即文档 ID
    pub fn id(&self) -> Option<&str> {
        self.name.as_deref()?.rsplit('/').next()
    }
}

/// `documents` 列表接口的响应体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListDocumentsResponse {
    /// 文档数量，`documents` 缺失时为 0
    pub fn document_count(&self) -> usize {
        self.documents.as_ref().map_or(0, Vec::len)
    }

    pub fn first(&self) -> Option<&Document> {
        self.documents.as_ref()?.first()
    }
}

/// 首个商品的展示字段，均已格式化为文本
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPreview {
    pub name: String,
    pub price: String,
    pub featured: String,
}

impl ProductPreview {
    pub const NAME_FIELD: &'static str = "name";
    pub const PRICE_FIELD: &'static str = "price";
    pub const FEATURED_FIELD: &'static str = "isFeatured";

    pub fn from_document(doc: &Document) -> Self {
        Self {
            name: doc
                .string_field(Self::NAME_FIELD)
                .map_or_else(|| PLACEHOLDER.to_string(), str::to_string),
            price: doc
                .double_field(Self::PRICE_FIELD)
                .map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string()),
            featured: doc
                .bool_field(Self::FEATURED_FIELD)
                .map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string()),
        }
    }
}

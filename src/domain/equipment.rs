// ==========================================
// 热处理分析引擎 - 设备标识
// ==========================================
// 说明: furnace（过程记录）与 machine（故障记录）是同一设备概念，
//       在读取记录时统一为 EquipmentRef，角色标签保留来源
// ==========================================

use crate::domain::types::EquipmentRole;
use serde::Serialize;

/// 设备引用（借用记录中的名称）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EquipmentRef<'a> {
    pub name: &'a str,
    pub role: EquipmentRole,
}

impl<'a> EquipmentRef<'a> {
    pub fn new(name: &'a str, role: EquipmentRole) -> Self {
        Self { name, role }
    }
}

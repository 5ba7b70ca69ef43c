// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use heat_treatment_analytics::domain::{HeatTreatmentLog, MaintenanceLog};

// ==========================================
// HeatTreatmentLog 构建器
// ==========================================

pub struct HeatTreatmentLogBuilder {
    log: HeatTreatmentLog,
}

impl HeatTreatmentLogBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            log: HeatTreatmentLog {
                id: id.to_string(),
                date: "2024-03-15".to_string(),
                shift: "A".to_string(),
                job_no: format!("JOB-{}", id),
                material: "EN19".to_string(),
                temperature: "860".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.log.date = date.to_string();
        self
    }

    pub fn furnace(mut self, furnace: &str) -> Self {
        self.log.furnace = furnace.to_string();
        self
    }

    pub fn process(mut self, process: &str) -> Self {
        self.log.process = process.to_string();
        self
    }

    pub fn job_no(mut self, job_no: &str) -> Self {
        self.log.job_no = job_no.to_string();
        self
    }

    pub fn material(mut self, material: &str) -> Self {
        self.log.material = material.to_string();
        self
    }

    /// 件数与单重（原始文本）
    pub fn weight(mut self, quantity: &str, weight_per_forging: &str) -> Self {
        self.log.quantity = quantity.to_string();
        self.log.weight_per_forging = weight_per_forging.to_string();
        self
    }

    /// 开始与结束时间（HH:MM）
    pub fn run(mut self, start: &str, end: &str) -> Self {
        self.log.process_start_time = start.to_string();
        self.log.end_time = end.to_string();
        self
    }

    pub fn build(self) -> HeatTreatmentLog {
        self.log
    }
}

// ==========================================
// MaintenanceLog 构建器
// ==========================================

pub struct MaintenanceLogBuilder {
    log: MaintenanceLog,
}

impl MaintenanceLogBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            log: MaintenanceLog {
                id: id.to_string(),
                date: "2024-03-15".to_string(),
                breakdown_type: "Electrical".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.log.date = date.to_string();
        self
    }

    pub fn machine(mut self, machine: &str) -> Self {
        self.log.machine = machine.to_string();
        self
    }

    pub fn repair_time(mut self, text: &str) -> Self {
        self.log.repair_time = text.to_string();
        self
    }

    pub fn build(self) -> MaintenanceLog {
        self.log
    }
}

// ============================================================================
// CONTRACT STORE - Estado de contratos de la sesión
// ============================================================================
// Transiciones puras: `add` y `update` devuelven un store nuevo y nunca
// modifican el actual. El hook `use_contracts` lo envuelve en un reducer.
// ============================================================================

use std::rc::Rc;

use crate::models::{sample_contracts, Contract, ContractPatch};

#[derive(Clone, Debug, PartialEq)]
pub struct ContractStore {
    contracts: Rc<Vec<Contract>>,
}

impl Default for ContractStore {
    fn default() -> Self {
        Self::new(sample_contracts())
    }
}

impl ContractStore {
    pub fn new(contracts: Vec<Contract>) -> Self {
        Self { contracts: Rc::new(contracts) }
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Inserta al principio. No comprueba ids duplicados.
    pub fn add(&self, contract: Contract) -> Self {
        let mut contracts = Vec::with_capacity(self.contracts.len() + 1);
        contracts.push(contract);
        contracts.extend(self.contracts.iter().cloned());
        Self::new(contracts)
    }

    /// Aplica `patch` a los contratos con ese id. Sin coincidencias devuelve
    /// el mismo store (comparte la colección).
    pub fn update(&self, id: &str, patch: &ContractPatch) -> Self {
        if patch.is_empty() || !self.contracts.iter().any(|c| c.id == id) {
            return self.clone();
        }

        let contracts = self
            .contracts
            .iter()
            .map(|c| if c.id == id { patch.apply(c) } else { c.clone() })
            .collect();
        Self::new(contracts)
    }

    /// true si ambos stores comparten la misma colección
    pub fn shares_collection(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.contracts, &other.contracts)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContractAction {
    Add(Contract),
    Update { id: String, patch: ContractPatch },
}

impl ContractStore {
    pub fn apply(&self, action: ContractAction) -> Self {
        match action {
            ContractAction::Add(contract) => {
                log::info!("📄 Contrato añadido: {}", contract.id);
                self.add(contract)
            }
            ContractAction::Update { id, patch } => {
                let next = self.update(&id, &patch);
                if next.shares_collection(self) {
                    log::debug!("⚠️ update sin efecto para el contrato {}", id);
                } else {
                    log::info!("✏️ Contrato actualizado: {}", id);
                }
                next
            }
        }
    }
}

#![no_std]

pub mod events;


use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

/// Storage keys for the contract
const INSTITUTION: Symbol = symbol_short!("INST");
const PATIENT_CTR: Symbol = symbol_short!("PAT_CTR");
const RECORD_CTR: Symbol = symbol_short!("REC_CTR");

/// A patient registered by the institution.
///
/// Ids are dense and zero-based: the N-th registered patient gets id N-1.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub birthdate: u64,
    pub patient_identity: Address,
    pub is_valid: bool,
}

/// A medical record issued by the institution.
///
/// `record_data` is an opaque payload (ciphertext or an off-chain content
/// reference). `patient_id` is stored as given and may reference a patient
/// registered outside this contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub id: u64,
    pub patient_id: u64,
    pub record_data: String,
    pub is_valid: bool,
}

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    Unauthorized = 2,
    PatientNotFound = 3,
    RecordNotFound = 4,
}

fn patient_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("PATIENT"), id)
}

fn record_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("RECORD"), id)
}

/// Only the institution can manage records. A missing institution fails the
/// check too: no caller can match an authority that was never set.
fn require_institution(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let institution: Address = env
        .storage()
        .instance()
        .get(&INSTITUTION)
        .ok_or(ContractError::Unauthorized)?;
    if institution != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn records_with_validity(env: &Env, validity: bool) -> Vec<MedicalRecord> {
    let count: u64 = env.storage().instance().get(&RECORD_CTR).unwrap_or(0);
    let mut matching = Vec::new(env);
    for id in 0..count {
        if let Some(record) = env
            .storage()
            .persistent()
            .get::<_, MedicalRecord>(&record_key(id))
        {
            if record.is_valid == validity {
                matching.push_back(record);
            }
        }
    }
    matching
}

#[contract]
pub struct HealthcareRecordsContract;

#[contractimpl]
impl HealthcareRecordsContract {
    /// Set the institution permitted to manage patients and records.
    ///
    /// Ungated by design: this is the deployment-time bootstrap step, and
    /// calling it again replaces the institution outright.
    pub fn set_institution(env: Env, institution: Address) {
        env.storage().instance().set(&INSTITUTION, &institution);

        events::publish_institution_set(&env, institution);
    }

    /// Get the current institution address
    pub fn get_institution(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&INSTITUTION)
            .ok_or(ContractError::NotInitialized)
    }

    /// Register a new patient. Institution only.
    pub fn register_patient(
        env: Env,
        caller: Address,
        name: String,
        birthdate: u64,
        patient_identity: Address,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        require_institution(&env, &caller)?;

        let id: u64 = env.storage().instance().get(&PATIENT_CTR).unwrap_or(0);
        let patient = Patient {
            id,
            name: name.clone(),
            birthdate,
            patient_identity: patient_identity.clone(),
            is_valid: true,
        };

        env.storage().persistent().set(&patient_key(id), &patient);
        env.storage().instance().set(&PATIENT_CTR, &(id + 1));

        events::publish_patient_registered(&env, id, name, patient_identity);

        Ok(id)
    }

    /// Get a patient by id
    pub fn get_patient(env: Env, id: u64) -> Result<Patient, ContractError> {
        env.storage()
            .persistent()
            .get(&patient_key(id))
            .ok_or(ContractError::PatientNotFound)
    }

    /// Issue a medical record for a patient. Institution only.
    ///
    /// `patient_id` is not checked against the patient table; records may
    /// point at identities managed elsewhere.
    pub fn issue_medical_record(
        env: Env,
        caller: Address,
        patient_id: u64,
        record_data: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        require_institution(&env, &caller)?;

        let id: u64 = env.storage().instance().get(&RECORD_CTR).unwrap_or(0);
        let record = MedicalRecord {
            id,
            patient_id,
            record_data,
            is_valid: true,
        };

        env.storage().persistent().set(&record_key(id), &record);
        env.storage().instance().set(&RECORD_CTR, &(id + 1));

        events::publish_record_issued(&env, id, patient_id);

        Ok(id)
    }

    /// Get a medical record by id
    pub fn get_medical_record(env: Env, id: u64) -> Result<MedicalRecord, ContractError> {
        env.storage()
            .persistent()
            .get(&record_key(id))
            .ok_or(ContractError::RecordNotFound)
    }

    /// Invalidate a medical record. Institution only.
    ///
    /// Soft delete: the record stays in the table with `is_valid = false`.
    /// Invalidating an already-invalid record succeeds and changes nothing.
    pub fn invalidate_medical_record(
        env: Env,
        caller: Address,
        record_id: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        require_institution(&env, &caller)?;

        let key = record_key(record_id);
        let mut record: MedicalRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::RecordNotFound)?;

        record.is_valid = false;
        env.storage().persistent().set(&key, &record);

        events::publish_record_invalidated(&env, record_id);

        Ok(())
    }

    /// All records still flagged valid, in ascending id order
    pub fn get_valid_medical_records(env: Env) -> Vec<MedicalRecord> {
        records_with_validity(&env, true)
    }

    /// All invalidated records, in ascending id order
    pub fn get_invalid_medical_records(env: Env) -> Vec<MedicalRecord> {
        records_with_validity(&env, false)
    }

    /// Get the total number of registered patients
    pub fn get_patient_count(env: Env) -> u64 {
        env.storage().instance().get(&PATIENT_CTR).unwrap_or(0)
    }

    /// Get the total number of issued records, valid or not
    pub fn get_record_count(env: Env) -> u64 {
        env.storage().instance().get(&RECORD_CTR).unwrap_or(0)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

//! 栈式执行器
//!
//! 按顺序执行动作序列，所有中间值都放在显式的值栈上。

use crate::middle::bytecode::{Action, Program};
use crate::util::span::Location;
use crate::vm::errors::{VMError, VMResult};
use crate::vm::instructions::{apply_binary, apply_unary};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// 值栈；短表达式不会触发堆分配
type ValueStack = SmallVec<[f64; 16]>;

/// VM 配置
#[derive(Debug, Clone)]
pub struct VMConfig {
    /// 初始栈容量
    pub stack_size: usize,
    /// 是否启用跟踪
    pub trace_execution: bool,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            stack_size: 64,
            trace_execution: false,
        }
    }
}

/// VM 状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMStatus {
    /// 准备好执行
    Ready,
    /// 正在执行
    Running,
    /// 执行完成
    Finished,
    /// 发生错误
    Error,
}

/// 栈式虚拟机
#[derive(Debug)]
pub struct VM {
    config: VMConfig,
    status: VMStatus,
    error: Option<VMError>,
    stack: ValueStack,
}

impl Default for VM {
    fn default() -> Self {
        Self::new_with_config(VMConfig::default())
    }
}

impl VM {
    /// 使用默认配置创建 VM
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用配置创建 VM
    pub fn new_with_config(config: VMConfig) -> Self {
        let stack = ValueStack::with_capacity(config.stack_size);
        Self {
            config,
            status: VMStatus::Ready,
            error: None,
            stack,
        }
    }

    /// 获取 VM 配置
    pub fn config(&self) -> &VMConfig {
        &self.config
    }

    /// 获取 VM 状态
    pub fn status(&self) -> VMStatus {
        self.status
    }

    /// 获取 VM 错误
    pub fn error(&self) -> Option<&VMError> {
        self.error.as_ref()
    }

    /// 执行程序，返回栈上剩下的唯一值
    ///
    /// Every call starts from an empty stack.
    pub fn execute(
        &mut self,
        program: &Program,
    ) -> VMResult<f64> {
        debug!("Executing {} actions", program.len());
        self.stack.clear();
        self.error = None;
        self.status = VMStatus::Running;

        match self.run(program) {
            Ok(value) => {
                self.status = VMStatus::Finished;
                debug!("Execution finished with {}", value);
                Ok(value)
            }
            Err(err) => {
                self.status = VMStatus::Error;
                self.stack.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn run(
        &mut self,
        program: &Program,
    ) -> VMResult<f64> {
        for action in program.iter() {
            if self.config.trace_execution {
                trace!("{:<16} stack={:?}", action.to_string(), self.stack.as_slice());
            }
            self.step(action)?;
        }

        match self.stack.as_slice() {
            [value] => Ok(*value),
            [] => Err(VMError::StackUnderflow {
                location: Location::Eof,
            }),
            values => Err(VMError::UnbalancedStack {
                depth: values.len(),
            }),
        }
    }

    /// 执行单个动作
    fn step(
        &mut self,
        action: &Action,
    ) -> VMResult<()> {
        match action {
            Action::PushNumber { value, .. } => {
                self.stack.push(*value);
            }
            Action::PushIdentifier { name, offset } => {
                return Err(VMError::Unimplemented {
                    feature: format!("identifier `{}`", name),
                    location: Location::Offset(*offset),
                });
            }
            Action::ApplyUnary { op, offset } => {
                let operand = self.pop(*offset)?;
                self.stack.push(apply_unary(*op, operand));
            }
            Action::ApplyBinary { op, offset } => {
                let right = self.pop(*offset)?;
                let left = self.pop(*offset)?;
                let value = apply_binary(*op, left, right).ok_or(VMError::InvalidOperator {
                    op: *op,
                    location: Location::Offset(*offset),
                })?;
                self.stack.push(value);
            }
        }
        Ok(())
    }

    fn pop(
        &mut self,
        offset: usize,
    ) -> VMResult<f64> {
        self.stack.pop().ok_or(VMError::StackUnderflow {
            location: Location::Offset(offset),
        })
    }
}
